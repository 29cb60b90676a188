use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::WorklogType;
use crate::utils::dates::YearMonth;

/// Empleado embebido en un worklog (el backend puede mandar el objeto completo)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogEmployee {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Registro de horas de un empleado para un tipo y un mes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    pub id: i64,
    #[serde(default)]
    pub employee: Option<WorklogEmployee>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub worklog_type: Option<WorklogType>,
    #[serde(default)]
    pub worklog_type_id: Option<i64>,
    /// "YYYY-MM", "YYYY-MM-DD" o [año, mes]
    #[serde(default)]
    pub month_date: Value,
    #[serde(default)]
    pub effort: f64,
}

impl Worklog {
    pub fn employee_ref(&self) -> Option<i64> {
        self.employee.as_ref().map(|e| e.id).or(self.employee_id)
    }

    pub fn worklog_type_ref(&self) -> Option<i64> {
        self.worklog_type.as_ref().map(|t| t.id).or(self.worklog_type_id)
    }

    pub fn month(&self) -> Option<YearMonth> {
        YearMonth::from_backend(&self.month_date)
    }

    pub fn month_label(&self) -> Option<String> {
        self.month().map(|m| m.label())
    }

    pub fn type_name(&self) -> Option<&str> {
        self.worklog_type
            .as_ref()
            .map(|t| t.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Referencia por id ({"id": 3}) usada en los payloads
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    pub id: i64,
}

/// Body de POST /worklogs y PUT /worklogs/{id}
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload {
    pub employee: IdRef,
    pub worklog_type: IdRef,
    /// Solo año y mes (YYYY-MM)
    pub month_date: String,
    pub effort: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_references_are_preferred_over_flat_ids() {
        let worklog: Worklog = serde_json::from_value(json!({
            "id": 10,
            "employee": {"id": 3, "firstName": "Ada", "lastName": "Lovelace"},
            "employeeId": 99,
            "worklogType": {"id": 2, "name": "Design"},
            "monthDate": "2024-03",
            "effort": 12.5
        }))
        .unwrap();

        assert_eq!(worklog.employee_ref(), Some(3));
        assert_eq!(worklog.worklog_type_ref(), Some(2));
        assert_eq!(worklog.type_name(), Some("Design"));
        assert_eq!(worklog.month_label().as_deref(), Some("March 2024"));
    }

    #[test]
    fn flat_shape_and_missing_month_are_tolerated() {
        let worklog: Worklog = serde_json::from_value(json!({
            "id": 11, "employeeId": 4, "worklogTypeId": 7, "effort": 3
        }))
        .unwrap();

        assert_eq!(worklog.employee_ref(), Some(4));
        assert_eq!(worklog.worklog_type_ref(), Some(7));
        assert_eq!(worklog.type_name(), None);
        assert_eq!(worklog.month_label(), None);
        assert_eq!(worklog.effort, 3.0);
    }

    #[test]
    fn payload_matches_backend_shape() {
        let payload = WorklogPayload {
            employee: IdRef { id: 1 },
            worklog_type: IdRef { id: 2 },
            month_date: "2024-03".into(),
            effort: 7.5,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"employee": {"id": 1}, "worklogType": {"id": 2}, "monthDate": "2024-03", "effort": 7.5})
        );
    }
}
