use crate::domain::property::{XdmProperty, XdmValue};
use crate::utils::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};

pub fn string(value: &str) -> XdmValue {
    XdmValue::String(value.to_string())
}

/// JSON has no NaN or infinity, those become null.
pub fn number(value: f64) -> XdmValue {
    match serde_json::Number::from_f64(value) {
        Some(n) => XdmValue::Number(n),
        None => {
            tracing::debug!("non-finite number {} serialized as null", value);
            XdmValue::Null
        }
    }
}

pub fn integer(value: i64) -> XdmValue {
    XdmValue::Number(value.into())
}

pub fn boolean(value: bool) -> XdmValue {
    XdmValue::Bool(value)
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
pub fn timestamp(value: &DateTime<Utc>) -> XdmValue {
    XdmValue::String(value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn object<T: XdmProperty>(node: &T) -> XdmValue {
    XdmValue::Object(node.serialize_to_xdm())
}

pub fn list<T: XdmProperty>(nodes: &[T]) -> XdmValue {
    XdmValue::Array(nodes.iter().map(object).collect())
}

/// Render a node as JSON text for whatever consumer forwards the payload.
pub fn to_json_string<T: XdmProperty>(node: &T, pretty: bool) -> Result<String> {
    let value = XdmValue::Object(node.serialize_to_xdm());
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    tracing::debug!("rendered xdm payload ({} bytes)", rendered.len());
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_number_is_exact() {
        assert_eq!(number(9.99), json!(9.99));
        assert_eq!(number(-0.5).as_f64(), Some(-0.5));
    }

    #[test]
    fn test_non_finite_number_becomes_null() {
        assert_eq!(number(f64::NAN), XdmValue::Null);
        assert_eq!(number(f64::INFINITY), XdmValue::Null);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(timestamp(&ts), json!("2024-05-01T12:30:00.000Z"));
    }

    #[test]
    fn test_leaf_helpers() {
        assert_eq!(string("abc"), json!("abc"));
        assert_eq!(integer(7), json!(7));
        assert_eq!(boolean(true), json!(true));
    }
}
