use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::Grade;
use crate::utils::dates::date_from_backend;

/// El backend devuelve el grado como texto libre o como objeto Grade
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GradeRef {
    Named(String),
    Grade(Grade),
}

impl GradeRef {
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            GradeRef::Named(name) => name.as_str(),
            GradeRef::Grade(grade) => grade.name.as_str(),
        };
        (!name.is_empty()).then_some(name)
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            GradeRef::Named(_) => None,
            GradeRef::Grade(grade) => Some(grade.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "badge badge-active",
            EmployeeStatus::Inactive => "badge badge-inactive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub grade: Option<GradeRef>,
    #[serde(default)]
    pub team_lead: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "deserialize_backend_date")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_backend_date")]
    pub end_date: Option<String>,
}

/// startDate/endDate llegan como "2020-01-15" o como [2020, 1, 15];
/// se guardan siempre como texto ISO
fn deserialize_backend_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(date_from_backend))
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Iniciales para el avatar ("JD"); no falla con nombres vacíos
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Un endDate presente y no vacío marca al empleado como inactivo
    pub fn status(&self) -> EmployeeStatus {
        match self.end_date.as_deref() {
            Some(end) if !end.trim().is_empty() => EmployeeStatus::Inactive,
            _ => EmployeeStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status() == EmployeeStatus::Active
    }

    pub fn grade_name(&self) -> Option<&str> {
        self.grade.as_ref().and_then(GradeRef::name)
    }

    pub fn team_lead_name(&self) -> Option<&str> {
        non_blank(self.team_lead.as_deref())
    }

    pub fn director_name(&self) -> Option<&str> {
        non_blank(self.director.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Body de POST /employees y PUT /employees/{id}
/// Los campos de texto vacíos viajan como null. El email no se edita en el
/// formulario pero se reenvía para que el PUT no lo borre.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub grade: Option<GradeRef>,
    pub team_lead: Option<String>,
    pub director: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employee(value: serde_json::Value) -> Employee {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn end_date_marks_employee_inactive() {
        let active = employee(json!({"id": 1, "firstName": "Ada", "lastName": "Lovelace", "startDate": "2020-01-01"}));
        let inactive = employee(json!({"id": 2, "firstName": "Alan", "lastName": "Turing", "endDate": "2023-06-30"}));
        let blank_end = employee(json!({"id": 3, "firstName": "Grace", "lastName": "Hopper", "endDate": ""}));

        assert_eq!(active.status().label(), "active");
        assert_eq!(inactive.status().label(), "inactive");
        assert!(blank_end.is_active());
    }

    #[test]
    fn grade_accepts_string_or_object() {
        let named = employee(json!({"id": 1, "firstName": "A", "lastName": "B", "grade": "Senior"}));
        let object = employee(json!({"id": 1, "firstName": "A", "lastName": "B", "grade": {"id": 4, "name": "Lead"}}));
        let missing = employee(json!({"id": 1, "firstName": "A", "lastName": "B", "grade": null}));

        assert_eq!(named.grade_name(), Some("Senior"));
        assert_eq!(object.grade_name(), Some("Lead"));
        assert_eq!(object.grade.as_ref().and_then(GradeRef::id), Some(4));
        assert_eq!(missing.grade_name(), None);
    }

    #[test]
    fn initials_handle_unicode_and_empty_names() {
        let e = employee(json!({"id": 1, "firstName": "ömer", "lastName": "çelik"}));
        assert_eq!(e.initials(), "ÖÇ");
        let empty = employee(json!({"id": 2, "firstName": "", "lastName": "Solo"}));
        assert_eq!(empty.initials(), "S");
    }

    #[test]
    fn payload_serializes_camel_case_with_nulls() {
        let payload = EmployeePayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: None,
            grade: Some(GradeRef::Grade(Grade { id: 2, name: "Senior".into(), description: None })),
            team_lead: None,
            director: Some("Babbage".into()),
            start_date: Some("2020-01-01".into()),
            end_date: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["grade"]["id"], 2);
        assert!(value["teamLead"].is_null());
        assert!(value["endDate"].is_null());
        assert!(value["email"].is_null());
    }

    #[test]
    fn array_shaped_dates_do_not_break_the_list() {
        let list: Vec<Employee> = serde_json::from_str(
            r#"[
                {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "startDate": [2020, 1, 15]},
                {"id": 2, "firstName": "Alan", "lastName": "Turing", "startDate": "2019-04-01", "endDate": [2023, 6, 30]},
                {"id": 3, "firstName": "Grace", "lastName": "Hopper", "startDate": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(list[0].start_date.as_deref(), Some("2020-01-15"));
        assert!(list[0].is_active());
        assert_eq!(list[1].end_date.as_deref(), Some("2023-06-30"));
        assert_eq!(list[1].status(), EmployeeStatus::Inactive);
        assert_eq!(list[2].start_date, None);
    }
}
