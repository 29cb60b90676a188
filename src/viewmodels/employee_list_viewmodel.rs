// ============================================================================
// EMPLOYEE LIST VIEWMODEL - Búsqueda, estadísticas y borrado
// ============================================================================

use crate::error::ApiResult;
use crate::models::Employee;
use crate::services::ApiClient;
use crate::utils::constants::NOT_SPECIFIED;
use crate::utils::dates::format_display_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// ViewModel de la lista de empleados
pub struct EmployeeListViewModel {
    api_client: ApiClient,
}

impl EmployeeListViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load_employees(&self) -> ApiResult<Vec<Employee>> {
        let employees = self.api_client.get_employees().await?;
        log::info!("👥 [EMPLOYEES] {} empleados cargados", employees.len());
        Ok(employees)
    }

    pub async fn delete_employee(&self, id: i64) -> ApiResult<()> {
        self.api_client.delete_employee(id).await
    }

    /// Filtro por nombre, apellido o nombre completo (sin distinguir mayúsculas)
    pub fn filter<'a>(employees: &'a [Employee], search: &str) -> Vec<&'a Employee> {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return employees.iter().collect();
        }

        employees
            .iter()
            .filter(|employee| {
                employee.first_name.to_lowercase().contains(&needle)
                    || employee.last_name.to_lowercase().contains(&needle)
                    || employee.full_name().to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn stats(employees: &[Employee]) -> EmployeeStats {
        let active = employees.iter().filter(|e| e.is_active()).count();
        EmployeeStats {
            total: employees.len(),
            active,
            inactive: employees.len() - active,
        }
    }

    pub fn grade_label(employee: &Employee) -> &str {
        employee.grade_name().unwrap_or(NOT_SPECIFIED)
    }

    pub fn start_date_label(employee: &Employee) -> String {
        format_display_date(employee.start_date.as_deref()).unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }

    /// Texto bajo el nombre en la tabla
    pub fn team_lead_caption(employee: &Employee) -> &str {
        employee.team_lead_name().unwrap_or("No manager")
    }

    pub fn manager_label(employee: &Employee) -> &str {
        employee.team_lead_name().unwrap_or("-")
    }

    pub fn result_count_label(count: usize) -> String {
        match count {
            1 => "1 result found".to_string(),
            n => format!("{} results found", n),
        }
    }
}

impl Default for EmployeeListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::remove_by_id;
    use serde_json::json;

    fn employees() -> Vec<Employee> {
        serde_json::from_value(json!([
            {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "teamLead": "Babbage", "startDate": "2020-02-01"},
            {"id": 2, "firstName": "Alan", "lastName": "Turing", "endDate": "2023-01-01"},
            {"id": 3, "firstName": "Grace", "lastName": "Hopper", "grade": {"id": 1, "name": "Senior"}}
        ]))
        .unwrap()
    }

    fn ids(found: Vec<&Employee>) -> Vec<i64> {
        found.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn search_matches_first_last_and_full_name() {
        let list = employees();
        assert_eq!(ids(EmployeeListViewModel::filter(&list, "  ADA ")), vec![1]);
        assert_eq!(ids(EmployeeListViewModel::filter(&list, "turing")), vec![2]);
        assert_eq!(ids(EmployeeListViewModel::filter(&list, "grace hop")), vec![3]);
        assert_eq!(ids(EmployeeListViewModel::filter(&list, "a")), vec![1, 2, 3]);
        assert_eq!(ids(EmployeeListViewModel::filter(&list, "")), vec![1, 2, 3]);
        assert!(EmployeeListViewModel::filter(&list, "zzz").is_empty());
    }

    #[test]
    fn stats_split_active_and_inactive() {
        let stats = EmployeeListViewModel::stats(&employees());
        assert_eq!(stats, EmployeeStats { total: 3, active: 2, inactive: 1 });
    }

    #[test]
    fn deleted_employee_leaves_the_displayed_list() {
        let mut list = employees();
        assert!(remove_by_id(&mut list, 2));
        assert_eq!(ids(EmployeeListViewModel::filter(&list, "")), vec![1, 3]);
        assert_eq!(EmployeeListViewModel::stats(&list).inactive, 0);
    }

    #[test]
    fn table_labels_fall_back() {
        let list = employees();
        assert_eq!(EmployeeListViewModel::grade_label(&list[0]), "Not specified");
        assert_eq!(EmployeeListViewModel::grade_label(&list[2]), "Senior");
        assert_eq!(EmployeeListViewModel::start_date_label(&list[0]), "01.02.2020");
        assert_eq!(EmployeeListViewModel::start_date_label(&list[1]), "Not specified");
        assert_eq!(EmployeeListViewModel::team_lead_caption(&list[1]), "No manager");
        assert_eq!(EmployeeListViewModel::manager_label(&list[0]), "Babbage");
        assert_eq!(EmployeeListViewModel::result_count_label(1), "1 result found");
    }
}
