// ============================================================================
// EMPLOYEE DETAIL VIEWMODEL - Ficha del empleado + sus worklogs
// ============================================================================

use crate::error::ApiResult;
use crate::models::{Employee, Worklog, UNKNOWN_TYPE_LABEL};
use crate::services::ApiClient;
use crate::utils::constants::{NOT_AVAILABLE, NOT_SPECIFIED};
use crate::utils::dates::{format_display_date, YearMonth};

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub worklogs: Vec<Worklog>,
}

pub struct EmployeeDetailViewModel {
    api_client: ApiClient,
}

impl EmployeeDetailViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Empleado y worklogs (todos, o solo los del mes si hay filtro)
    pub async fn load(&self, id: i64, month: Option<&YearMonth>) -> ApiResult<EmployeeDetail> {
        let employee = self.api_client.get_employee(id).await?;
        let worklogs = self.load_worklogs(id, month).await?;
        log::info!("👤 [DETAIL] Empleado {} con {} worklogs", id, worklogs.len());
        Ok(EmployeeDetail { employee, worklogs })
    }

    pub async fn load_worklogs(&self, id: i64, month: Option<&YearMonth>) -> ApiResult<Vec<Worklog>> {
        match month {
            Some(month) => self.api_client.get_worklogs_by_employee_and_month(id, month).await,
            None => self.api_client.get_worklogs_by_employee(id).await,
        }
    }

    pub async fn delete_worklog(&self, id: i64) -> ApiResult<()> {
        self.api_client.delete_worklog(id).await
    }

    pub fn total_effort(worklogs: &[Worklog]) -> f64 {
        worklogs.iter().map(|w| w.effort).sum()
    }

    pub fn date_label(raw: Option<&str>) -> String {
        format_display_date(raw).unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }

    pub fn type_label(worklog: &Worklog) -> &str {
        worklog.type_name().unwrap_or(UNKNOWN_TYPE_LABEL)
    }

    pub fn month_label(worklog: &Worklog) -> String {
        worklog.month_label().unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl Default for EmployeeDetailViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn worklogs() -> Vec<Worklog> {
        serde_json::from_value(json!([
            {"id": 1, "worklogType": {"id": 1, "name": "Design"}, "monthDate": "2024-03-01", "effort": 7.5},
            {"id": 2, "monthDate": [2024, 4], "effort": 4},
            {"id": 3, "effort": 0.5}
        ]))
        .unwrap()
    }

    #[test]
    fn total_effort_sums_all_worklogs() {
        assert_eq!(EmployeeDetailViewModel::total_effort(&worklogs()), 12.0);
        assert_eq!(EmployeeDetailViewModel::total_effort(&[]), 0.0);
    }

    #[test]
    fn worklog_labels_have_fallbacks() {
        let list = worklogs();
        assert_eq!(EmployeeDetailViewModel::type_label(&list[0]), "Design");
        assert_eq!(EmployeeDetailViewModel::type_label(&list[1]), "Unknown");
        assert_eq!(EmployeeDetailViewModel::month_label(&list[1]), "April 2024");
        assert_eq!(EmployeeDetailViewModel::month_label(&list[2]), "N/A");
    }

    #[test]
    fn missing_dates_read_not_specified() {
        assert_eq!(EmployeeDetailViewModel::date_label(Some("2021-07-09")), "09.07.2021");
        assert_eq!(EmployeeDetailViewModel::date_label(None), "Not specified");
    }
}
