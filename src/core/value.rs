//! Werte, die Tools und Rezepte in Settings oder Queue schreiben.

use serde::{Deserialize, Serialize};

/// Wert eines Tool-Aufrufs: Schalter, Zahl oder Freitext (Prompt, Preset-Name).
///
/// Unpassende Typen werden umgedeutet, nie abgelehnt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CommandValue {
    /// Schalter-Sicht: `0`, leerer Text und `false` gelten als inaktiv.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(text) => !text.trim().is_empty(),
        }
    }

    /// Zahlen-Sicht. Nicht parsebarer Text ergibt `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Number(_) => None,
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Text-Sicht, nur für echte Textwerte.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for CommandValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for CommandValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for CommandValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for CommandValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for CommandValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CommandValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Zahl ohne überflüssige Nachkommastellen (`2.0` → `"2"`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_coercion_is_lenient() {
        assert!(CommandValue::Number(2.0).as_bool());
        assert!(!CommandValue::Number(0.0).as_bool());
        assert!(!CommandValue::Text("  ".into()).as_bool());
        assert!(CommandValue::Text("sky".into()).as_bool());
    }

    #[test]
    fn number_coercion_rejects_garbage() {
        assert_eq!(CommandValue::Bool(true).as_number(), Some(1.0));
        assert_eq!(CommandValue::Text("1.25".into()).as_number(), Some(1.25));
        assert_eq!(CommandValue::Text("abc".into()).as_number(), None);
        assert_eq!(CommandValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn untagged_json_roundtrip_shapes() {
        let parsed: Vec<CommandValue> =
            serde_json::from_str(r#"[true, 2, 0.5, "vintage"]"#).expect("JSON sollte parsen");
        assert_eq!(
            parsed,
            vec![
                CommandValue::Bool(true),
                CommandValue::Number(2.0),
                CommandValue::Number(0.5),
                CommandValue::Text("vintage".into()),
            ]
        );
    }

    #[test]
    fn format_number_drops_trailing_zero() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.5), "0.5");
    }
}
