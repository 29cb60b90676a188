// ============================================================================
// WORKLOG TYPE VIEWMODEL - CRUD de tipos de worklog
// ============================================================================

use crate::error::{ApiResult, ValidationError};
use crate::models::{WorklogType, WorklogTypePayload};
use crate::services::ApiClient;

/// Tipo en edición dentro del modal (id = None → creación)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorklogTypeDraft {
    pub id: Option<i64>,
    pub name: String,
}

impl WorklogTypeDraft {
    pub fn from_type(worklog_type: &WorklogType) -> Self {
        Self {
            id: Some(worklog_type.id),
            name: worklog_type.name.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn modal_title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Worklog Type"
        } else {
            "Add Worklog Type"
        }
    }

    pub fn to_payload(&self) -> Result<WorklogTypePayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Name"));
        }
        Ok(WorklogTypePayload {
            id: self.id,
            name: name.to_string(),
        })
    }
}

pub struct WorklogTypeViewModel {
    api_client: ApiClient,
}

impl WorklogTypeViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load(&self) -> ApiResult<Vec<WorklogType>> {
        self.api_client.get_worklog_types().await
    }

    /// Crear o actualizar y devolver la lista recargada
    pub async fn submit(&self, payload: &WorklogTypePayload) -> ApiResult<Vec<WorklogType>> {
        match payload.id {
            Some(id) => self.api_client.update_worklog_type(id, payload).await?,
            None => self.api_client.create_worklog_type(payload).await?,
        };
        self.load().await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api_client.delete_worklog_type(id).await
    }
}

impl Default for WorklogTypeViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_for_new_type_has_no_id() {
        let draft = WorklogTypeDraft { id: None, name: "  Support ".into() };
        assert_eq!(draft.modal_title(), "Add Worklog Type");
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.id, None);
        assert_eq!(payload.name, "Support");
    }

    #[test]
    fn editing_keeps_the_id() {
        let existing = WorklogType { id: 4, name: "Design".into(), description: None };
        let draft = WorklogTypeDraft::from_type(&existing);
        assert!(draft.is_editing());
        assert_eq!(draft.modal_title(), "Edit Worklog Type");
        assert_eq!(draft.to_payload().unwrap().id, Some(4));
    }

    #[test]
    fn blank_name_is_rejected() {
        let draft = WorklogTypeDraft { id: None, name: "   ".into() };
        assert_eq!(draft.to_payload(), Err(ValidationError::Required("Name")));
    }
}
