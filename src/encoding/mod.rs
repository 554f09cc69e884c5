//! Response decoding.
//!
//! Typed decoding of parsed JSON values, including the client-level date
//! decoding strategy. Under [`DateDecoding::Formatted`], date strings in the
//! response are normalized to ISO-8601 before serde decoding, so `chrono`
//! fields in the target type accept them regardless of the wire format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RestError;

/// How date strings in response bodies are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateDecoding {
    /// Dates are ISO-8601 / RFC 3339 (chrono's serde default). No rewriting.
    #[default]
    Iso8601,
    /// Dates use the given chrono format string (e.g. `"%Y-%m-%d %H:%M:%S"`).
    ///
    /// Every string in the response that parses with this format is rewritten
    /// to ISO-8601 before decoding. Naive timestamps are interpreted as UTC;
    /// date-only formats normalize to `YYYY-MM-DD`.
    Formatted(String),
}

/// Decode a parsed JSON value into `T` under the given date strategy.
pub fn decode_json<T: DeserializeOwned>(value: Value, dates: &DateDecoding) -> Result<T, RestError> {
    let value = match dates {
        DateDecoding::Iso8601 => value,
        DateDecoding::Formatted(fmt) => normalize_dates(value, fmt),
    };
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("typed decode failed: {e}");
        RestError::JsonError(e.to_string())
    })
}

fn normalize_dates(value: Value, fmt: &str) -> Value {
    match value {
        Value::String(s) => match reformat_date_string(&s, fmt) {
            Some(iso) => Value::String(iso),
            None => Value::String(s),
        },
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| normalize_dates(v, fmt)).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize_dates(v, fmt)))
                .collect(),
        ),
        other => other,
    }
}

/// Reformat `s` to ISO-8601 if it parses with `fmt`; `None` leaves it as-is.
fn reformat_date_string(s: &str, fmt: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
        return Some(dt.to_rfc3339());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
        return Some(Utc.from_utc_datetime(&dt).to_rfc3339());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Employee {
        name: String,
        date_of_joining: DateTime<Utc>,
    }

    #[test]
    fn iso8601_dates_decode_by_default() {
        let value = json!({
            "name": "dave",
            "date_of_joining": "2020-05-17T10:30:00Z",
        });
        let employee: Employee = decode_json(value, &DateDecoding::Iso8601).unwrap();
        assert_eq!(employee.name, "dave");
        assert_eq!(employee.date_of_joining.to_rfc3339(), "2020-05-17T10:30:00+00:00");
    }

    #[test]
    fn formatted_dates_are_normalized_before_decoding() {
        let value = json!({
            "name": "dave",
            "date_of_joining": "2020-05-17 10:30:00",
        });
        let dates = DateDecoding::Formatted("%Y-%m-%d %H:%M:%S".to_string());
        let employee: Employee = decode_json(value, &dates).unwrap();
        assert_eq!(employee.date_of_joining.to_rfc3339(), "2020-05-17T10:30:00+00:00");
    }

    #[test]
    fn non_date_strings_are_untouched() {
        let dates = DateDecoding::Formatted("%Y-%m-%d %H:%M:%S".to_string());
        let value = json!({"note": "meet at 10:30", "n": 3});
        let normalized = match &dates {
            DateDecoding::Formatted(fmt) => normalize_dates(value.clone(), fmt),
            _ => unreachable!(),
        };
        assert_eq!(normalized, value);
    }

    #[test]
    fn date_only_formats_normalize_to_iso_dates() {
        assert_eq!(
            reformat_date_string("17/05/2020", "%d/%m/%Y").as_deref(),
            Some("2020-05-17")
        );
    }

    #[test]
    fn nested_values_are_normalized() {
        #[derive(Debug, Deserialize)]
        struct Team {
            members: Vec<Employee>,
        }

        let value = json!({
            "members": [
                {"name": "a", "date_of_joining": "2020-05-17 10:30:00"},
                {"name": "b", "date_of_joining": "2021-01-02 08:00:00"},
            ]
        });
        let dates = DateDecoding::Formatted("%Y-%m-%d %H:%M:%S".to_string());
        let team: Team = decode_json(value, &dates).unwrap();
        assert_eq!(team.members.len(), 2);
        assert_eq!(team.members[1].name, "b");
    }

    #[test]
    fn decode_failure_is_json_error() {
        let value = json!({"name": 42});
        let result: Result<Employee, _> = decode_json(value, &DateDecoding::Iso8601);
        assert!(matches!(result, Err(RestError::JsonError(_))));
    }
}
