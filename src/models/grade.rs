use serde::{Deserialize, Serialize};

/// Grado (valor de catálogo, solo lectura desde /grades)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
