//! Deserializers for a backend that is loose about types: ids arrive as numbers
//! or numeric strings, text fields as strings, numbers or `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any scalar as text; `null` and missing become `""`.
pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Integer from a number or numeric string; anything else is `0`.
pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(value_to_int(&Value::deserialize(d)?).unwrap_or_default())
}

pub fn opt_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(value_to_int(&Value::deserialize(d)?))
}

/// Float from a number or numeric string; anything else is `0.0`.
pub fn float<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// `[1, "2"]` or `"1,2"` as a list of ids.
pub fn int_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<i64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.iter().filter_map(value_to_int).collect(),
        Value::String(s) => s
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect(),
        Value::Number(n) => n.as_i64().into_iter().collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `primary` unless it is blank, then `fallback`.
pub fn first_text(primary: String, fallback: String) -> String {
    if primary.trim().is_empty() {
        fallback
    } else {
        primary
    }
}

/// Placeholder the tables show for blank fields.
pub fn or_na(s: &str) -> &str {
    if s.trim().is_empty() {
        "N/A"
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "text")]
        text: String,
        #[serde(default, deserialize_with = "int")]
        int: i64,
        #[serde(default, deserialize_with = "opt_int")]
        opt: Option<i64>,
        #[serde(default, deserialize_with = "float")]
        float: f64,
        #[serde(default, deserialize_with = "int_list")]
        list: Vec<i64>,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let p: Probe = serde_json::from_str(
            r#"{"text": 12, "int": "7", "opt": 3.0, "float": "99.50", "list": "1, 3"}"#,
        )
        .unwrap();
        assert_eq!(p.text, "12");
        assert_eq!(p.int, 7);
        assert_eq!(p.opt, Some(3));
        assert_eq!(p.float, 99.5);
        assert_eq!(p.list, vec![1, 3]);
    }

    #[test]
    fn nulls_and_missing_fall_back() {
        let p: Probe = serde_json::from_str(r#"{"text": null, "opt": "abc", "list": [1, "x", "2"]}"#).unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.int, 0);
        assert_eq!(p.opt, None);
        assert_eq!(p.float, 0.0);
        assert_eq!(p.list, vec![1, 2]);
    }

    #[test]
    fn first_text_skips_blank() {
        assert_eq!(first_text("  ".into(), "b".into()), "b");
        assert_eq!(first_text("a".into(), "b".into()), "a");
    }

    #[test]
    fn or_na_replaces_blank() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("  "), "N/A");
        assert_eq!(or_na("Acme"), "Acme");
    }
}
