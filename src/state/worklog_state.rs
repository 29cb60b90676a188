// ============================================================================
// WORKLOG STATE - Formulario de worklog y catálogo de tipos
// ============================================================================

use crate::models::{remove_by_id, Employee, WorklogType};
use crate::viewmodels::{WorklogForm, WorklogTypeDraft};

#[derive(Debug, Clone, PartialEq)]
pub struct WorklogFormState {
    pub editing: Option<i64>,
    /// Empleado fijado por `?employeeId=` (select deshabilitado)
    pub preselected_employee: Option<i64>,
    pub form: WorklogForm,
    pub employees: Vec<Employee>,
    pub worklog_types: Vec<WorklogType>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl WorklogFormState {
    pub fn new(editing: Option<i64>, preselected_employee: Option<i64>) -> Self {
        Self::with_form(editing, preselected_employee, WorklogForm::new(preselected_employee))
    }

    pub fn with_form(editing: Option<i64>, preselected_employee: Option<i64>, form: WorklogForm) -> Self {
        Self {
            editing,
            preselected_employee,
            form,
            employees: Vec::new(),
            worklog_types: Vec::new(),
            loading: true,
            saving: false,
            error: None,
            success: None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Worklog"
        } else {
            "Add Worklog"
        }
    }

    pub fn employee_locked(&self) -> bool {
        self.preselected_employee.is_some()
    }
}

impl Default for WorklogFormState {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorklogTypeListState {
    pub types: Vec<WorklogType>,
    pub loading: bool,
    pub error: Option<String>,
    /// Some = modal abierto
    pub draft: Option<WorklogTypeDraft>,
    pub saving: bool,
    pub modal_error: Option<String>,
}

impl Default for WorklogTypeListState {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            loading: true,
            error: None,
            draft: None,
            saving: false,
            modal_error: None,
        }
    }
}

impl WorklogTypeListState {
    pub fn open_modal(&mut self, draft: WorklogTypeDraft) {
        self.draft = Some(draft);
        self.modal_error = None;
    }

    pub fn close_modal(&mut self) {
        self.draft = None;
        self.saving = false;
        self.modal_error = None;
    }

    pub fn remove(&mut self, id: i64) -> bool {
        remove_by_id(&mut self.types, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dates::YearMonth;

    #[test]
    fn preselected_employee_locks_the_select() {
        let month = YearMonth::new(2024, 3).unwrap();
        let state = WorklogFormState::with_form(None, Some(4), WorklogForm::for_month(Some(4), month));
        assert!(state.employee_locked());
        assert_eq!(state.form.employee_id, "4");
        assert_eq!(state.title(), "Add Worklog");
        assert!(!WorklogFormState::new(Some(1), None).employee_locked());
    }

    #[test]
    fn modal_lifecycle_resets_errors() {
        let mut state = WorklogTypeListState::default();
        state.open_modal(WorklogTypeDraft::default());
        state.modal_error = Some("Name is required".into());
        state.saving = true;
        state.close_modal();
        assert!(state.draft.is_none());
        assert!(state.modal_error.is_none());
        assert!(!state.saving);
    }

    #[test]
    fn delete_removes_type_locally() {
        let mut state = WorklogTypeListState {
            types: vec![
                WorklogType { id: 1, name: "Design".into(), description: None },
                WorklogType { id: 2, name: "Support".into(), description: None },
            ],
            ..WorklogTypeListState::default()
        };
        assert!(state.remove(2));
        assert_eq!(state.types.len(), 1);
    }
}
