// ============================================================================
// WORKLOG FORM VIEWMODEL - Alta y edición de worklogs
// ============================================================================

use futures::future::join;

use crate::error::{ApiResult, ValidationError};
use crate::models::{Employee, IdRef, Worklog, WorklogPayload, WorklogType};
use crate::services::ApiClient;
use crate::utils::dates::YearMonth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorklogField {
    Employee,
    WorklogType,
    Month,
    Effort,
}

/// Valores crudos de los inputs
#[derive(Debug, Clone, PartialEq)]
pub struct WorklogForm {
    pub employee_id: String,
    pub worklog_type_id: String,
    pub month: String,
    pub effort: String,
}

impl WorklogForm {
    /// Formulario vacío con el mes actual y, opcionalmente, empleado preseleccionado
    pub fn new(preselected_employee: Option<i64>) -> Self {
        Self::for_month(preselected_employee, YearMonth::current())
    }

    pub fn for_month(preselected_employee: Option<i64>, month: YearMonth) -> Self {
        Self {
            employee_id: preselected_employee.map(|id| id.to_string()).unwrap_or_default(),
            worklog_type_id: String::new(),
            month: month.to_input_value(),
            effort: String::new(),
        }
    }

    pub fn from_worklog(worklog: &Worklog) -> Self {
        Self {
            employee_id: worklog.employee_ref().map(|id| id.to_string()).unwrap_or_default(),
            worklog_type_id: worklog.worklog_type_ref().map(|id| id.to_string()).unwrap_or_default(),
            month: worklog.month().map(|m| m.to_input_value()).unwrap_or_default(),
            effort: super::format_effort(worklog.effort),
        }
    }

    pub fn set_field(&mut self, field: WorklogField, value: String) {
        match field {
            WorklogField::Employee => self.employee_id = value,
            WorklogField::WorklogType => self.worklog_type_id = value,
            WorklogField::Month => self.month = value,
            WorklogField::Effort => self.effort = value,
        }
    }

    pub fn to_payload(&self) -> Result<WorklogPayload, ValidationError> {
        let employee_id = parse_id(&self.employee_id).ok_or(ValidationError::MissingEmployee)?;
        let worklog_type_id = parse_id(&self.worklog_type_id).ok_or(ValidationError::MissingWorklogType)?;
        let month = YearMonth::parse_input(&self.month)?;
        let effort = parse_effort(&self.effort)?;

        Ok(WorklogPayload {
            employee: IdRef { id: employee_id },
            worklog_type: IdRef { id: worklog_type_id },
            month_date: month.to_input_value(),
            effort,
        })
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Horas >= 0 en pasos de 0.5 (como el input min=0 step=0.5)
pub fn parse_effort(raw: &str) -> Result<f64, ValidationError> {
    let effort: f64 = raw.trim().parse().map_err(|_| ValidationError::InvalidEffort)?;
    if !effort.is_finite() || effort < 0.0 || (effort * 2.0).fract() != 0.0 {
        return Err(ValidationError::InvalidEffort);
    }
    Ok(effort)
}

/// Datos necesarios para pintar el formulario
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorklogFormData {
    pub employees: Vec<Employee>,
    pub worklog_types: Vec<WorklogType>,
    pub worklog: Option<Worklog>,
}

pub struct WorklogFormViewModel {
    api_client: ApiClient,
}

impl WorklogFormViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Empleados y tipos en paralelo; luego el worklog si se está editando
    pub async fn load(&self, editing: Option<i64>) -> ApiResult<WorklogFormData> {
        let (employees, worklog_types) = join(
            self.api_client.get_employees(),
            self.api_client.get_worklog_types(),
        )
        .await;

        let worklog = match editing {
            Some(id) => Some(self.api_client.get_worklog(id).await?),
            None => None,
        };

        Ok(WorklogFormData {
            employees: employees?,
            worklog_types: worklog_types?,
            worklog,
        })
    }

    pub async fn save(&self, editing: Option<i64>, payload: &WorklogPayload) -> ApiResult<()> {
        match editing {
            Some(id) => self.api_client.update_worklog(id, payload).await?,
            None => self.api_client.create_worklog(payload).await?,
        };
        Ok(())
    }
}

impl Default for WorklogFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn march() -> YearMonth {
        YearMonth::new(2024, 3).unwrap()
    }

    #[test]
    fn preselected_employee_fills_the_form() {
        let form = WorklogForm::for_month(Some(7), march());
        assert_eq!(form.employee_id, "7");
        assert_eq!(form.month, "2024-03");
        assert!(WorklogForm::new(None).employee_id.is_empty());
    }

    #[test]
    fn payload_requires_selections_and_valid_effort() {
        let mut form = WorklogForm::for_month(None, march());
        assert_eq!(form.to_payload(), Err(ValidationError::MissingEmployee));

        form.set_field(WorklogField::Employee, "3".into());
        assert_eq!(form.to_payload(), Err(ValidationError::MissingWorklogType));

        form.set_field(WorklogField::WorklogType, "2".into());
        form.set_field(WorklogField::Effort, "7.5".into());
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.employee.id, 3);
        assert_eq!(payload.worklog_type.id, 2);
        assert_eq!(payload.month_date, "2024-03");
        assert_eq!(payload.effort, 7.5);

        form.set_field(WorklogField::Month, "03-2024".into());
        assert_eq!(form.to_payload(), Err(ValidationError::InvalidMonth));
    }

    #[test]
    fn effort_must_be_non_negative_half_steps() {
        assert_eq!(parse_effort("0"), Ok(0.0));
        assert_eq!(parse_effort(" 12 "), Ok(12.0));
        assert_eq!(parse_effort("-1"), Err(ValidationError::InvalidEffort));
        assert_eq!(parse_effort("1.25"), Err(ValidationError::InvalidEffort));
        assert_eq!(parse_effort("abc"), Err(ValidationError::InvalidEffort));
        assert_eq!(parse_effort("inf"), Err(ValidationError::InvalidEffort));
    }

    #[test]
    fn edit_form_is_prefilled_from_worklog() {
        let worklog: Worklog = serde_json::from_value(json!({
            "id": 5,
            "employee": {"id": 3},
            "worklogType": {"id": 2, "name": "Design"},
            "monthDate": "2024-03-01",
            "effort": 8.0
        }))
        .unwrap();

        let form = WorklogForm::from_worklog(&worklog);
        assert_eq!(form.employee_id, "3");
        assert_eq!(form.worklog_type_id, "2");
        assert_eq!(form.month, "2024-03");
        assert_eq!(form.effort, "8");
    }
}
