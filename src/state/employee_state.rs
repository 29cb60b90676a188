// ============================================================================
// EMPLOYEE STATE - Lista, ficha y formulario de empleados
// ============================================================================

use crate::models::{remove_by_id, Employee, Grade, Worklog};
use crate::viewmodels::{EmployeeForm, EmployeeListViewModel, EmployeeStats};

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    /// Mensaje de éxito temporal (separado de `error`)
    pub flash: Option<String>,
    /// Secuencia del flash vigente: solo el temporizador del último borrado lo limpia
    pub flash_seq: u64,
    /// Empleado pendiente de confirmar en el modal de borrado
    pub pending_delete: Option<Employee>,
    pub deleting: bool,
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            error: None,
            search: String::new(),
            flash: None,
            flash_seq: 0,
            pending_delete: None,
            deleting: false,
        }
    }
}

impl EmployeeListState {
    pub fn visible(&self) -> Vec<&Employee> {
        EmployeeListViewModel::filter(&self.employees, &self.search)
    }

    pub fn stats(&self) -> EmployeeStats {
        EmployeeListViewModel::stats(&self.employees)
    }

    /// Borrado confirmado por el backend: quitar de la lista y cerrar el modal.
    /// Devuelve la secuencia del flash para `expire_flash`.
    pub fn apply_delete(&mut self, id: i64, flash: &str) -> u64 {
        remove_by_id(&mut self.employees, id);
        self.pending_delete = None;
        self.deleting = false;
        self.error = None;
        self.flash = Some(flash.to_string());
        self.flash_seq += 1;
        self.flash_seq
    }

    /// Quitar el flash si sigue siendo el de `seq`
    pub fn expire_flash(&mut self, seq: u64) -> bool {
        if self.flash_seq != seq || self.flash.is_none() {
            return false;
        }
        self.flash = None;
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetailState {
    pub employee: Option<Employee>,
    pub worklogs: Vec<Worklog>,
    pub loading: bool,
    pub error: Option<String>,
    /// Valor del input de mes (YYYY-MM, vacío = todos)
    pub month_filter: String,
}

impl Default for EmployeeDetailState {
    fn default() -> Self {
        Self {
            employee: None,
            worklogs: Vec::new(),
            loading: true,
            error: None,
            month_filter: String::new(),
        }
    }
}

impl EmployeeDetailState {
    pub fn remove_worklog(&mut self, id: i64) -> bool {
        remove_by_id(&mut self.worklogs, id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFormState {
    pub editing: Option<i64>,
    pub form: EmployeeForm,
    pub grades: Vec<Grade>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl EmployeeFormState {
    pub fn new(editing: Option<i64>) -> Self {
        Self {
            editing,
            form: EmployeeForm::default(),
            grades: Vec::new(),
            loading: true,
            saving: false,
            error: None,
            success: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Employee"
        } else {
            "Add Employee"
        }
    }
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn list_state() -> EmployeeListState {
        let employees: Vec<Employee> = serde_json::from_value(json!([
            {"id": 1, "firstName": "Ada", "lastName": "Lovelace"},
            {"id": 2, "firstName": "Alan", "lastName": "Turing", "endDate": "2023-01-01"}
        ]))
        .unwrap();
        EmployeeListState {
            employees,
            loading: false,
            ..EmployeeListState::default()
        }
    }

    #[test]
    fn delete_removes_locally_and_sets_flash() {
        let mut state = list_state();
        state.pending_delete = state.employees.first().cloned();
        state.deleting = true;

        state.apply_delete(1, "Employee deleted successfully.");

        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.visible()[0].id, 2);
        assert_eq!(state.stats().total, 1);
        assert_eq!(state.flash.as_deref(), Some("Employee deleted successfully."));
        assert!(state.error.is_none());
        assert!(state.pending_delete.is_none());
        assert!(!state.deleting);
    }

    #[test]
    fn earlier_flash_timer_does_not_clear_a_newer_flash() {
        let mut state = list_state();
        let first = state.apply_delete(1, "Employee deleted successfully.");
        let second = state.apply_delete(2, "Employee deleted successfully.");

        assert!(!state.expire_flash(first));
        assert!(state.flash.is_some());
        assert!(state.expire_flash(second));
        assert!(state.flash.is_none());
        assert!(!state.expire_flash(second));
    }

    #[test]
    fn search_narrows_visible_rows() {
        let mut state = list_state();
        state.search = "tur".into();
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.stats().total, 2);
    }

    #[test]
    fn form_title_depends_on_mode() {
        assert_eq!(EmployeeFormState::new(None).title(), "Add Employee");
        assert_eq!(EmployeeFormState::new(Some(3)).title(), "Edit Employee");
    }
}
