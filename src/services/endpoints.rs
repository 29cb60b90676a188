// ============================================================================
// ENDPOINTS - Rutas REST relativas a la base URL
// ============================================================================
// Funciones puras (sin red) para poder testear el formato de cada ruta.
// Los nombres de team lead / director llegan ya codificados (ApiClient usa
// encodeURIComponent antes de llamar aquí).
// ============================================================================

use crate::utils::dates::YearMonth;

/// Dimensión de agregación del dashboard con su segmento de ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardScope<'a> {
    Employee(i64),
    TeamLead(&'a str),
    Director(&'a str),
}

impl DashboardScope<'_> {
    fn path(&self) -> String {
        match self {
            DashboardScope::Employee(id) => format!("/worklogs/dashboard/employee/{}", id),
            DashboardScope::TeamLead(name) => format!("/worklogs/dashboard/team-lead/{}", name),
            DashboardScope::Director(name) => format!("/worklogs/dashboard/director/{}", name),
        }
    }
}

pub fn employees() -> String {
    "/employees".to_string()
}

pub fn employee(id: i64) -> String {
    format!("/employees/{}", id)
}

pub fn grades() -> String {
    "/grades".to_string()
}

pub fn worklogs() -> String {
    "/worklogs".to_string()
}

pub fn worklog(id: i64) -> String {
    format!("/worklogs/{}", id)
}

pub fn worklogs_by_employee(employee_id: i64) -> String {
    format!("/worklogs/employee/{}", employee_id)
}

pub fn worklogs_by_employee_and_month(employee_id: i64, month: &YearMonth) -> String {
    format!("/worklogs/employee/{}/month/{}", employee_id, month.to_backend_param())
}

pub fn worklog_types() -> String {
    "/worklog-types".to_string()
}

pub fn worklog_type(id: i64) -> String {
    format!("/worklog-types/{}", id)
}

pub fn effort_summary(scope: &DashboardScope<'_>, month: &YearMonth) -> String {
    format!("{}/month/{}", scope.path(), month.to_backend_param())
}

pub fn effort_total(scope: &DashboardScope<'_>, month: &YearMonth) -> String {
    format!("{}/total", effort_summary(scope, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_2024() -> YearMonth {
        YearMonth::new(2024, 3).unwrap()
    }

    #[test]
    fn crud_paths() {
        assert_eq!(employee(7), "/employees/7");
        assert_eq!(worklogs_by_employee(7), "/worklogs/employee/7");
        assert_eq!(worklog_type(2), "/worklog-types/2");
        assert_eq!(worklogs_by_employee_and_month(7, &march_2024()), "/worklogs/employee/7/month/03-2024");
    }

    #[test]
    fn dashboard_paths_use_backend_month_format() {
        let month = march_2024();
        assert_eq!(
            effort_summary(&DashboardScope::Employee(5), &month),
            "/worklogs/dashboard/employee/5/month/03-2024"
        );
        assert_eq!(
            effort_total(&DashboardScope::TeamLead("Jane%20Doe"), &month),
            "/worklogs/dashboard/team-lead/Jane%20Doe/month/03-2024/total"
        );
        assert_eq!(
            effort_total(&DashboardScope::Director("Smith"), &month),
            "/worklogs/dashboard/director/Smith/month/03-2024/total"
        );
    }
}
