use serde::{Deserialize, Serialize};

/// Tipo de worklog (categoría gestionable por el usuario)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorklogType {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body de POST /worklog-types y PUT /worklog-types/{id}
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorklogTypePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}
