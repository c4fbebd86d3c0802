use clap::Parser;
use xdm_commerce::utils::{logger, validation::Validate};
use xdm_commerce::{to_json_string, CliConfig, EventConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting xdm-commerce CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(payload) => println!("{}", payload),
        Err(e) => {
            tracing::error!("❌ Rendering XDM payload failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> xdm_commerce::Result<String> {
    config.validate()?;

    let event_config = EventConfig::from_file(&config.config)?;
    event_config.validate()?;

    let event = event_config.to_event()?;
    if config.strict {
        // 只在 --strict 時檢查必填欄位，序列化本身不驗證
        event.validate()?;
    }

    to_json_string(&event, config.pretty)
}
