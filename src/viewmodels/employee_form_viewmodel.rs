// ============================================================================
// EMPLOYEE FORM VIEWMODEL - Alta y edición de empleados
// ============================================================================

use crate::error::{ApiResult, ValidationError};
use crate::models::{Employee, EmployeePayload, Grade, GradeRef};
use crate::services::ApiClient;
use crate::utils::dates::to_date_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    FirstName,
    LastName,
    TeamLead,
    Director,
    Grade,
    StartDate,
    EndDate,
}

impl EmployeeField {
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeField::FirstName => "firstName",
            EmployeeField::LastName => "lastName",
            EmployeeField::TeamLead => "teamLead",
            EmployeeField::Director => "director",
            EmployeeField::Grade => "gradeId",
            EmployeeField::StartDate => "startDate",
            EmployeeField::EndDate => "endDate",
        }
    }
}

/// Estado editable del formulario (valores tal como están en los inputs)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub team_lead: String,
    pub director: String,
    pub grade_id: Option<i64>,
    pub start_date: String,
    pub end_date: String,
    /// Campos del empleado cargado que el formulario no edita; se reenvían en el PUT
    pub email: Option<String>,
    /// Grado original, tal cual vino del backend, mientras el usuario no elija otro
    pub original_grade: Option<GradeRef>,
}

impl EmployeeForm {
    /// Precargar desde un empleado existente. Un grado en texto libre se
    /// resuelve contra el catálogo por nombre.
    pub fn from_employee(employee: &Employee, grades: &[Grade]) -> Self {
        let grade_id = match &employee.grade {
            Some(GradeRef::Grade(grade)) => Some(grade.id),
            Some(GradeRef::Named(name)) => grades.iter().find(|g| &g.name == name).map(|g| g.id),
            None => None,
        };

        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            team_lead: employee.team_lead.clone().unwrap_or_default(),
            director: employee.director.clone().unwrap_or_default(),
            grade_id,
            start_date: to_date_input(employee.start_date.as_deref()),
            end_date: to_date_input(employee.end_date.as_deref()),
            email: employee.email.clone(),
            original_grade: employee.grade.clone(),
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::FirstName => self.first_name = value,
            EmployeeField::LastName => self.last_name = value,
            EmployeeField::TeamLead => self.team_lead = value,
            EmployeeField::Director => self.director = value,
            EmployeeField::Grade => {
                self.grade_id = value.trim().parse().ok();
                self.original_grade = None;
            }
            EmployeeField::StartDate => self.start_date = value,
            EmployeeField::EndDate => self.end_date = value,
        }
    }

    pub fn value(&self, field: EmployeeField) -> String {
        match field {
            EmployeeField::FirstName => self.first_name.clone(),
            EmployeeField::LastName => self.last_name.clone(),
            EmployeeField::TeamLead => self.team_lead.clone(),
            EmployeeField::Director => self.director.clone(),
            EmployeeField::Grade => self.grade_id.map(|id| id.to_string()).unwrap_or_default(),
            EmployeeField::StartDate => self.start_date.clone(),
            EmployeeField::EndDate => self.end_date.clone(),
        }
    }

    /// Validar y construir el body. El grado solo es obligatorio al crear.
    pub fn to_payload(&self, grades: &[Grade], editing: bool) -> Result<EmployeePayload, ValidationError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;

        let grade = match &self.original_grade {
            Some(original) => Some(original.clone()),
            None => self
                .grade_id
                .and_then(|id| grades.iter().find(|g| g.id == id))
                .cloned()
                .map(GradeRef::Grade),
        };
        if grade.is_none() && !editing {
            return Err(ValidationError::MissingGrade);
        }

        let start_date = required(&self.start_date, "Start date")?;

        Ok(EmployeePayload {
            first_name,
            last_name,
            email: self.email.clone(),
            grade,
            team_lead: optional(&self.team_lead),
            director: optional(&self.director),
            start_date: Some(start_date),
            end_date: optional(&self.end_date),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    optional(value).ok_or(ValidationError::Required(field))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct EmployeeFormViewModel {
    api_client: ApiClient,
}

impl EmployeeFormViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Catálogo de grados y, en modo edición, el empleado
    pub async fn load(&self, editing: Option<i64>) -> ApiResult<(Vec<Grade>, Option<Employee>)> {
        let grades = self.api_client.get_grades().await?;
        let employee = match editing {
            Some(id) => Some(self.api_client.get_employee(id).await?),
            None => None,
        };
        Ok((grades, employee))
    }

    pub async fn save(&self, editing: Option<i64>, payload: &EmployeePayload) -> ApiResult<()> {
        match editing {
            Some(id) => self.api_client.update_employee(id, payload).await?,
            None => self.api_client.create_employee(payload).await?,
        };
        Ok(())
    }
}

impl Default for EmployeeFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grades() -> Vec<Grade> {
        vec![
            Grade { id: 1, name: "Junior".into(), description: None },
            Grade { id: 2, name: "Senior".into(), description: None },
        ]
    }

    fn filled_form() -> EmployeeForm {
        let mut form = EmployeeForm::default();
        form.set_field(EmployeeField::FirstName, " Ada ".into());
        form.set_field(EmployeeField::LastName, "Lovelace".into());
        form.set_field(EmployeeField::Grade, "2".into());
        form.set_field(EmployeeField::StartDate, "2020-01-15".into());
        form
    }

    #[test]
    fn payload_trims_and_nulls_empty_fields() {
        let payload = filled_form().to_payload(&grades(), false).unwrap();
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.grade.as_ref().and_then(GradeRef::id), Some(2));
        assert_eq!(payload.email, None);
        assert_eq!(payload.team_lead, None);
        assert_eq!(payload.end_date, None);
        assert_eq!(payload.start_date.as_deref(), Some("2020-01-15"));
    }

    #[test]
    fn grade_is_required_only_when_creating() {
        let mut form = filled_form();
        form.set_field(EmployeeField::Grade, String::new());
        assert_eq!(form.to_payload(&grades(), false), Err(ValidationError::MissingGrade));
        assert!(form.to_payload(&grades(), true).unwrap().grade.is_none());
    }

    #[test]
    fn required_fields_are_reported_in_order() {
        let form = EmployeeForm::default();
        assert_eq!(
            form.to_payload(&grades(), true).unwrap_err().to_string(),
            "First name is required"
        );

        let mut form = filled_form();
        form.set_field(EmployeeField::StartDate, " ".into());
        assert_eq!(form.to_payload(&grades(), false), Err(ValidationError::Required("Start date")));
    }

    #[test]
    fn edit_form_is_prefilled_from_employee() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 9, "firstName": "Alan", "lastName": "Turing", "grade": "Junior",
            "teamLead": "Max", "startDate": "2019-04-01T00:00:00", "endDate": null
        }))
        .unwrap();

        let form = EmployeeForm::from_employee(&employee, &grades());
        assert_eq!(form.grade_id, Some(1));
        assert_eq!(form.start_date, "2019-04-01");
        assert_eq!(form.end_date, "");
        assert_eq!(form.value(EmployeeField::TeamLead), "Max");
        assert_eq!(form.value(EmployeeField::Grade), "1");
    }

    #[test]
    fn untouched_fields_survive_an_edit() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 9, "firstName": "Alan", "lastName": "Turing", "email": "alan@example.com",
            "grade": "Principal", "startDate": "2019-04-01"
        }))
        .unwrap();

        let form = EmployeeForm::from_employee(&employee, &grades());
        let body = serde_json::to_value(form.to_payload(&grades(), true).unwrap()).unwrap();
        assert_eq!(body["email"], "alan@example.com");
        assert_eq!(body["grade"], "Principal");
    }

    #[test]
    fn picking_a_grade_replaces_the_original() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 9, "firstName": "Alan", "lastName": "Turing",
            "grade": "Principal", "startDate": "2019-04-01"
        }))
        .unwrap();

        let mut form = EmployeeForm::from_employee(&employee, &grades());
        form.set_field(EmployeeField::Grade, "2".into());
        let body = serde_json::to_value(form.to_payload(&grades(), true).unwrap()).unwrap();
        assert_eq!(body["grade"]["id"], 2);
        assert_eq!(body["grade"]["name"], "Senior");
    }
}
