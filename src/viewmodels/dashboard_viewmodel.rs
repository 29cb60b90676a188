// ============================================================================
// DASHBOARD VIEWMODEL - Resúmenes de esfuerzo por empleado / team lead / director
// ============================================================================
// Devuelve valores; la vista decide qué escribir en el estado.
// ============================================================================

use futures::future::try_join;

use crate::error::{ApiError, ApiResult};
use crate::models::{EffortSummary, Employee};
use crate::services::ApiClient;
use crate::utils::dates::YearMonth;

/// Dimensión de agregación del dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Employee,
    TeamLead,
    Director,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Employee, Dimension::TeamLead, Dimension::Director];

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Employee => "Employee Dashboard",
            Dimension::TeamLead => "Team Lead Dashboard",
            Dimension::Director => "Director Dashboard",
        }
    }

    pub fn select_label(&self) -> &'static str {
        match self {
            Dimension::Employee => "Select Employee",
            Dimension::TeamLead => "Select Team Lead",
            Dimension::Director => "Select Director",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            Dimension::Employee => "employeeSelector",
            Dimension::TeamLead => "teamLeadSelector",
            Dimension::Director => "directorSelector",
        }
    }

    pub fn log_tag(&self) -> &'static str {
        match self {
            Dimension::Employee => "employee",
            Dimension::TeamLead => "team-lead",
            Dimension::Director => "director",
        }
    }
}

/// Datos de arranque del dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardOptions {
    pub employees: Vec<Employee>,
    pub team_leads: Vec<String>,
    pub directors: Vec<String>,
}

/// Resultado de una dimensión (resumen + total)
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionResult {
    pub summary: Option<EffortSummary>,
    pub total: f64,
}

pub struct DashboardViewModel {
    api_client: ApiClient,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load_options(&self) -> ApiResult<DashboardOptions> {
        let employees = self.api_client.get_employees().await?;
        Ok(Self::build_options(employees))
    }

    /// Resumen y total de la dimensión seleccionada para un mes.
    /// `selection` es el id del empleado o el nombre del team lead / director.
    pub async fn load_dimension(
        &self,
        dimension: Dimension,
        selection: &str,
        month: &YearMonth,
    ) -> ApiResult<DimensionResult> {
        log::info!(
            "📊 [DASHBOARD] Cargando {} '{}' para {}",
            dimension.log_tag(),
            selection,
            month.to_backend_param()
        );

        // Resumen y total en paralelo
        let (summary, total) = match dimension {
            Dimension::Employee => {
                let employee_id = parse_employee_id(selection)?;
                try_join(
                    self.api_client.get_employee_effort_summary(employee_id, month),
                    self.api_client.get_total_effort_by_employee(employee_id, month),
                )
                .await?
            }
            Dimension::TeamLead => {
                try_join(
                    self.api_client.get_team_lead_effort_summary(selection, month),
                    self.api_client.get_total_effort_by_team_lead(selection, month),
                )
                .await?
            }
            Dimension::Director => {
                try_join(
                    self.api_client.get_director_effort_summary(selection, month),
                    self.api_client.get_total_effort_by_director(selection, month),
                )
                .await?
            }
        };

        if let Some(summary) = &summary {
            log::debug!("📊 [DASHBOARD] {} entradas en el resumen", summary.entries().len());
        }

        Ok(DimensionResult { summary, total })
    }

    pub fn build_options(employees: Vec<Employee>) -> DashboardOptions {
        let team_leads = distinct_names(employees.iter().map(|e| e.team_lead_name()));
        let directors = distinct_names(employees.iter().map(|e| e.director_name()));
        DashboardOptions {
            employees,
            team_leads,
            directors,
        }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Nombres distintos y no vacíos, en orden de aparición
pub fn distinct_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: Vec<String> = Vec::new();
    for name in names.into_iter().flatten() {
        if !seen.iter().any(|existing| existing == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

fn parse_employee_id(selection: &str) -> ApiResult<i64> {
    selection
        .trim()
        .parse()
        .map_err(|_| ApiError::Serialization(format!("invalid employee id '{}'", selection)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_leads_and_directors_are_distinct_in_first_seen_order() {
        let employees: Vec<Employee> = serde_json::from_value(json!([
            {"id": 1, "firstName": "A", "lastName": "A", "teamLead": "Zoe", "director": "Dan"},
            {"id": 2, "firstName": "B", "lastName": "B", "teamLead": "Max", "director": "Dan"},
            {"id": 3, "firstName": "C", "lastName": "C", "teamLead": "Zoe", "director": ""},
            {"id": 4, "firstName": "D", "lastName": "D"}
        ]))
        .unwrap();

        let options = DashboardViewModel::build_options(employees);
        assert_eq!(options.team_leads, vec!["Zoe", "Max"]);
        assert_eq!(options.directors, vec!["Dan"]);
        assert_eq!(options.employees.len(), 4);
    }

    #[test]
    fn employee_selection_must_be_numeric() {
        assert_eq!(parse_employee_id(" 12 ").unwrap(), 12);
        assert!(parse_employee_id("abc").is_err());
    }
}
