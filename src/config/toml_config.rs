use crate::domain::model::{Commerce, ExperienceEvent, ProductListItem, SaveForLaters};
use crate::utils::error::{Result, XdmError};
use crate::utils::validation::{self, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub event: EventSection,
    pub save_for_later: Option<MeasureConfig>,
    pub product_list_items: Option<Vec<ProductListItemConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSection {
    pub event_type: Option<String>,
    /// RFC 3339 字串，例如 "2024-05-01T12:00:00Z"
    pub timestamp: Option<String>,
    /// 沒有 timestamp 時是否使用目前時間
    pub timestamp_now: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureConfig {
    pub id: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListItemConfig {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price_total: Option<f64>,
    pub currency_code: Option<String>,
}

impl EventConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(XdmError::IoError)?;
        tracing::debug!("Loaded event config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| XdmError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MEASURE_ID})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| XdmError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(event_type) = &self.event.event_type {
            validation::validate_non_empty_string("event.event_type", event_type)?;
        }

        if let Some(raw) = &self.event.timestamp {
            parse_timestamp(raw)?;
        }

        if let Some(measure) = &self.save_for_later {
            if let Some(id) = &measure.id {
                validation::validate_non_empty_string("save_for_later.id", id)?;
            }
            if let Some(value) = measure.value {
                validation::validate_finite("save_for_later.value", value)?;
            }
        }

        for (index, item) in self.product_list_items.iter().flatten().enumerate() {
            let prefix = format!("product_list_items[{}]", index);
            if let Some(quantity) = item.quantity {
                validation::validate_min(&format!("{}.quantity", prefix), quantity, 0)?;
            }
            if let Some(price) = item.price_total {
                validation::validate_finite(&format!("{}.price_total", prefix), price)?;
                validation::validate_min(&format!("{}.price_total", prefix), price, 0.0)?;
            }
            if let Some(code) = &item.currency_code {
                validation::validate_currency_code(&format!("{}.currency_code", prefix), code)?;
            }
        }

        Ok(())
    }

    /// 轉換成 ExperienceEvent，未設定的數值欄位使用 0
    pub fn to_event(&self) -> Result<ExperienceEvent> {
        let timestamp = match (&self.event.timestamp, self.event.timestamp_now) {
            (Some(raw), _) => Some(parse_timestamp(raw)?),
            (None, Some(true)) => Some(Utc::now()),
            (None, _) => None,
        };

        let commerce = self.save_for_later.as_ref().map(|m| {
            let mut measure = SaveForLaters::new();
            measure.set_id(m.id.clone());
            measure.set_value(m.value.unwrap_or_default());
            Commerce {
                save_for_laters: Some(measure),
            }
        });

        let product_list_items = self.product_list_items.as_ref().map(|items| {
            items
                .iter()
                .map(|item| ProductListItem {
                    sku: item.sku.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity.unwrap_or_default(),
                    price_total: item.price_total.unwrap_or_default(),
                    currency_code: item.currency_code.clone(),
                })
                .collect()
        });

        Ok(ExperienceEvent {
            event_type: self.event.event_type.clone(),
            timestamp,
            commerce,
            product_list_items,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| XdmError::InvalidConfigValueError {
            field: "event.timestamp".to_string(),
            value: raw.to_string(),
            reason: format!("Invalid RFC 3339 timestamp: {}", e),
        })
}

impl Validate for EventConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_event_config() {
        let toml_content = r#"
[event]
event_type = "commerce.saveForLaters"
timestamp = "2024-05-01T12:00:00Z"

[save_for_later]
id = "measure-12345"
value = 42.5

[[product_list_items]]
sku = "SKU-1"
quantity = 1
price_total = 59.99
currency_code = "USD"
"#;

        let config = EventConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let event = config.to_event().unwrap();
        assert_eq!(event.event_type.as_deref(), Some("commerce.saveForLaters"));
        let measure = event.commerce.unwrap().save_for_laters.unwrap();
        assert_eq!(measure.id(), Some("measure-12345"));
        assert_eq!(measure.value(), 42.5);
        assert_eq!(event.product_list_items.unwrap()[0].quantity, 1);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("XDM_TEST_MEASURE_ID", "env-measure");

        let toml_content = r#"
[event]

[save_for_later]
id = "${XDM_TEST_MEASURE_ID}"
"#;

        let config = EventConfig::from_toml_str(toml_content).unwrap();
        let event = config.to_event().unwrap();
        let measure = event.commerce.unwrap().save_for_laters.unwrap();
        assert_eq!(measure.id(), Some("env-measure"));
        assert_eq!(measure.value(), 0.0);

        std::env::remove_var("XDM_TEST_MEASURE_ID");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let substituted = EventConfig::substitute_env_vars("id = \"${XDM_TEST_UNSET_VAR}\"").unwrap();
        assert_eq!(substituted, "id = \"${XDM_TEST_UNSET_VAR}\"");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[event]
timestamp = "yesterday"
"#;
        let config = EventConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert!(config.to_event().is_err());

        let toml_content = r#"
[event]

[[product_list_items]]
quantity = -2
"#;
        let config = EventConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(XdmError::InvalidConfigValueError { ref field, .. })
                if field == "product_list_items[0].quantity"
        ));
    }

    #[test]
    fn test_timestamp_now() {
        let config = EventConfig::from_toml_str("[event]\ntimestamp_now = true\n").unwrap();
        assert!(config.to_event().unwrap().timestamp.is_some());

        let config = EventConfig::from_toml_str("[event]\n").unwrap();
        assert!(config.to_event().unwrap().timestamp.is_none());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[event]\nevent_type = \"commerce.saveForLaters\"\n")
            .unwrap();

        let config = EventConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.event.event_type.as_deref(),
            Some("commerce.saveForLaters")
        );
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            EventConfig::from_toml_str("[event"),
            Err(XdmError::ConfigError { .. })
        ));
    }
}
