use crate::domain::property::XdmSchema;
use crate::utils::error::{Result, XdmError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Required-field check for schema nodes. Serialization never calls this.
impl<T: XdmSchema> Validate for T {
    fn validate(&self) -> Result<()> {
        validate_required(self)?;
        self.validate_nested()
    }
}

pub fn validate_required<T: XdmSchema>(node: &T) -> Result<()> {
    for field in T::FIELDS.iter().filter(|f| f.is_required()) {
        if field.read(node).is_none() {
            tracing::debug!(node = T::NODE, field = field.name, "required field not set");
            return Err(XdmError::MissingRequiredField {
                node: T::NODE,
                field: field.name,
            });
        }
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(XdmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(XdmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(XdmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(XdmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(XdmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

/// ISO 4217 alphabetic code: three uppercase ASCII letters.
pub fn validate_currency_code(field_name: &str, code: &str) -> Result<()> {
    let re = regex::Regex::new(r"^[A-Z]{3}$").map_err(|e| XdmError::ConfigError {
        message: e.to_string(),
    })?;
    if !re.is_match(code) {
        return Err(XdmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Currency code must be three uppercase letters (ISO 4217)".to_string(),
        });
    }
    Ok(())
}
