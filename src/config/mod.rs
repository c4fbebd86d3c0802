pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli {
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "xdm-commerce")]
    #[command(about = "Render a commerce experience event as an XDM payload")]
    pub struct CliConfig {
        #[arg(long, help = "Path to the TOML event description")]
        pub config: PathBuf,

        #[arg(long, help = "Pretty-print the JSON payload")]
        pub pretty: bool,

        #[arg(long, help = "Fail when a required schema field is not set")]
        pub strict: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("config", &self.config.to_string_lossy())
        }
    }

}
