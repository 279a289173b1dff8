use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/* The EMA cloud delivers most numeric KPIs as JSON strings ("12.5") and a
 * few as plain numbers, depending on the endpoint. These helpers accept
 * either representation so the exposed records always carry f64. */

const REPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn value_to_f64<E: serde::de::Error>(value: &Value) -> Result<f64, E> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| E::custom(format!("number out of f64 range: {}", n))),
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|e| E::custom(format!("invalid numeric string {:?}: {}", s, e))),
        other => Err(E::custom(format!(
            "expected number or numeric string, got: {}",
            other
        ))),
    }
}

pub fn f64_from_value<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(d)?;
    value_to_f64(&value)
}

/// Like `f64_from_value` but tolerates a missing or null field. Pair with
/// `#[serde(default)]` so absent keys deserialize as `None`.
pub fn f64_option_from_value<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value_to_f64(&value).map(Some),
    }
}

pub fn f64_vec_from_values<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
    let values = Vec::<Value>::deserialize(d)?;
    values.iter().map(value_to_f64).collect()
}

/// Timestamps arrive as local wall-clock strings without an offset, e.g.
/// "2023-11-12 14:05:00".
pub fn datetime_from_value<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
    let s = String::deserialize(d)?;
    NaiveDateTime::parse_from_str(&s, REPORT_DATETIME_FORMAT)
        .map_err(|e| serde::de::Error::custom(format!("invalid report datetime {:?}: {}", s, e)))
}
