// ============================================================================
// EFFORT SUMMARY - Agregación de horas por tipo de worklog
// ============================================================================
// El backend no tiene un contrato estable para la clave del resumen: a veces es
// el nombre, a veces el tipo serializado como JSON, a veces el toString() de un
// objeto Java ("WorklogType@1a2b3c"). El decode es best-effort: lo que no se
// reconoce se muestra como "Unknown" sin levantar error.
// ============================================================================

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const UNKNOWN_TYPE_LABEL: &str = "Unknown";

/// Clave de una entrada del resumen
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryKey {
    Text(String),
    Object(Map<String, Value>),
}

impl SummaryKey {
    fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => SummaryKey::Text(text),
            Value::Object(map) => SummaryKey::Object(map),
            other => SummaryKey::Text(other.to_string()),
        }
    }

    /// Nombre del tipo de worklog, o "Unknown"
    pub fn type_label(&self) -> String {
        let decoded = match self {
            SummaryKey::Text(raw) => {
                let parsed = if raw.contains('{') {
                    match serde_json::from_str::<Value>(raw) {
                        Ok(Value::Object(map)) => name_field(&map),
                        _ => None,
                    }
                } else {
                    None
                };
                if parsed.is_none() && raw.contains('@') {
                    log::debug!("🔎 [SUMMARY] Clave con referencia de objeto: {}", raw);
                }
                parsed
            }
            SummaryKey::Object(map) => name_field(map),
        };
        decoded.unwrap_or_else(|| UNKNOWN_TYPE_LABEL.to_string())
    }
}

fn name_field(map: &Map<String, Value>) -> Option<String> {
    match map.get("name")? {
        Value::String(name) if !name.is_empty() => Some(name.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub key: SummaryKey,
    pub hours: Value,
}

/// Fila lista para la tabla del dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffortSummary {
    entries: Vec<SummaryEntry>,
}

impl EffortSummary {
    /// Acepta objeto {clave: horas}, lista de pares [clave, horas] o lista de
    /// objetos {key, value|hours|total}. Cualquier otra cosa queda vacía.
    pub fn from_value(value: Value) -> Self {
        let entries = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, hours)| SummaryEntry { key: SummaryKey::Text(key), hours })
                .collect(),
            Value::Array(items) => items.into_iter().filter_map(entry_from_item).collect(),
            other => {
                log::warn!("⚠️ [SUMMARY] Formato de resumen no reconocido: {}", other);
                Vec::new()
            }
        };
        Self { entries }
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        self.entries
            .iter()
            .map(|entry| SummaryRow {
                label: entry.key.type_label(),
                hours: format_hours(&entry.hours),
            })
            .collect()
    }
}

fn entry_from_item(item: Value) -> Option<SummaryEntry> {
    match item {
        Value::Array(mut pair) if pair.len() == 2 => {
            let hours = pair.pop()?;
            let key = pair.pop()?;
            Some(SummaryEntry { key: SummaryKey::from_value(key), hours })
        }
        Value::Object(mut map) => {
            let key = map.remove("key")?;
            let hours = ["value", "hours", "total"]
                .iter()
                .find_map(|field| map.remove(*field))
                .unwrap_or(Value::Null);
            Some(SummaryEntry { key: SummaryKey::from_value(key), hours })
        }
        other => {
            log::debug!("🔎 [SUMMARY] Entrada ignorada: {}", other);
            None
        }
    }
}

impl<'de> Deserialize<'de> for EffortSummary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Total de horas: número, número como texto o null (→ 0)
pub fn parse_total(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// 8.0 → "8", 7.5 → "7.5"
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // evita "-0"
        return "0".to_string();
    }
    value.to_string()
}

pub fn format_hours(value: &Value) -> String {
    match value {
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels(value: Value) -> Vec<String> {
        EffortSummary::from_value(value).rows().into_iter().map(|r| r.label).collect()
    }

    #[test]
    fn json_encoded_key_uses_its_name() {
        assert_eq!(labels(json!({"{\"id\":1,\"name\":\"Design\"}": 12})), vec!["Design"]);
    }

    #[test]
    fn rows_keep_backend_key_order() {
        let summary: EffortSummary = serde_json::from_str(
            r#"{"{\"id\":2,\"name\":\"Zeta\"}": 1, "{\"id\":1,\"name\":\"Alpha\"}": 2}"#,
        )
        .unwrap();
        let labels: Vec<String> = summary.rows().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn plain_string_key_is_unknown() {
        assert_eq!(labels(json!({"Design": 12})), vec!["Unknown"]);
        assert_eq!(labels(json!({"WorklogType@6d06d69c": 3})), vec!["Unknown"]);
    }

    #[test]
    fn malformed_or_nameless_json_keys_are_unknown() {
        assert_eq!(labels(json!({"{not json": 1})), vec!["Unknown"]);
        assert_eq!(labels(json!({"{\"id\":1}": 1})), vec!["Unknown"]);
        assert_eq!(labels(json!({"{\"id\":1,\"name\":\"\"}": 1})), vec!["Unknown"]);
    }

    #[test]
    fn object_keys_from_entry_lists_use_name() {
        let pairs = json!([[{"id": 1, "name": "Meetings"}, 4], ["{\"name\":\"Dev\"}", 6.5]]);
        assert_eq!(labels(pairs), vec!["Meetings", "Dev"]);

        let objects = json!([{"key": {"id": 2, "name": "Support"}, "hours": 2}, {"key": {"id": 3}, "value": 1}]);
        assert_eq!(labels(objects), vec!["Support", "Unknown"]);
    }

    #[test]
    fn hours_render_without_trailing_zero() {
        let rows = EffortSummary::from_value(json!([["{\"name\":\"A\"}", 8.0], ["{\"name\":\"B\"}", 7.5]])).rows();
        assert_eq!(rows[0].hours, "8");
        assert_eq!(rows[1].hours, "7.5");
    }

    #[test]
    fn null_and_scalars_give_empty_summary() {
        assert!(EffortSummary::from_value(json!(null)).is_empty());
        assert!(EffortSummary::from_value(json!(42)).is_empty());
        let summary: Option<EffortSummary> = serde_json::from_str("null").unwrap();
        assert!(summary.is_none());
    }

    #[test]
    fn totals_tolerate_strings_and_null() {
        assert_eq!(parse_total(&json!(40.5)), 40.5);
        assert_eq!(parse_total(&json!("12")), 12.0);
        assert_eq!(parse_total(&json!(null)), 0.0);
        assert_eq!(format_number(parse_total(&json!(null))), "0");
    }
}
