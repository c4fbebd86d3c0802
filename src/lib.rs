pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::EventConfig;
pub use crate::core::serializer::to_json_string;
pub use crate::domain::model::{Commerce, ExperienceEvent, ProductListItem, SaveForLaters};
pub use crate::domain::property::{Field, Presence, XdmMap, XdmProperty, XdmSchema, XdmValue};
pub use crate::utils::error::{Result, XdmError};
