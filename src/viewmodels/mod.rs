pub mod dashboard_viewmodel;
pub mod employee_detail_viewmodel;
pub mod employee_form_viewmodel;
pub mod employee_list_viewmodel;
pub mod worklog_form_viewmodel;
pub mod worklog_type_viewmodel;

pub use dashboard_viewmodel::{DashboardOptions, DashboardViewModel, Dimension, DimensionResult};
pub use employee_detail_viewmodel::{EmployeeDetail, EmployeeDetailViewModel};
pub use employee_form_viewmodel::{EmployeeField, EmployeeForm, EmployeeFormViewModel};
pub use employee_list_viewmodel::{EmployeeListViewModel, EmployeeStats};
pub use worklog_form_viewmodel::{WorklogField, WorklogForm, WorklogFormData, WorklogFormViewModel};
pub use worklog_type_viewmodel::{WorklogTypeDraft, WorklogTypeViewModel};

use crate::models::summary::format_number;

/// Horas tal como se muestran en tablas e inputs
pub fn format_effort(effort: f64) -> String {
    format_number(effort)
}
