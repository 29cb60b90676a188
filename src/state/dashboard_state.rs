// ============================================================================
// DASHBOARD STATE - Mes seleccionado + un panel por dimensión
// ============================================================================

use crate::models::SummaryRow;
use crate::state::{RequestGuard, RequestTicket};
use crate::utils::dates::YearMonth;
use crate::viewmodels::{DashboardOptions, Dimension, DimensionResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionPanel {
    /// Id del empleado o nombre del team lead / director ("" = sin selección)
    pub selected: String,
    pub result: Option<DimensionResult>,
    pub loading: bool,
}

impl DimensionPanel {
    pub fn has_selection(&self) -> bool {
        !self.selected.trim().is_empty()
    }

    /// `None` → "No data available" sin tabla
    pub fn rows(&self) -> Option<Vec<SummaryRow>> {
        self.result
            .as_ref()
            .and_then(|r| r.summary.as_ref())
            .map(|summary| summary.rows())
    }

    pub fn total(&self) -> f64 {
        self.result.as_ref().map(|r| r.total).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub month: YearMonth,
    pub options: DashboardOptions,
    pub loading: bool,
    pub error: Option<String>,
    pub employee: DimensionPanel,
    pub team_lead: DimensionPanel,
    pub director: DimensionPanel,
}

impl DashboardState {
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            options: DashboardOptions::default(),
            loading: true,
            error: None,
            employee: DimensionPanel::default(),
            team_lead: DimensionPanel::default(),
            director: DimensionPanel::default(),
        }
    }

    pub fn panel(&self, dimension: Dimension) -> &DimensionPanel {
        match dimension {
            Dimension::Employee => &self.employee,
            Dimension::TeamLead => &self.team_lead,
            Dimension::Director => &self.director,
        }
    }

    pub fn panel_mut(&mut self, dimension: Dimension) -> &mut DimensionPanel {
        match dimension {
            Dimension::Employee => &mut self.employee,
            Dimension::TeamLead => &mut self.team_lead,
            Dimension::Director => &mut self.director,
        }
    }

    /// Cambiar la selección; devuelve true si hay que pedir datos
    pub fn select(&mut self, dimension: Dimension, selection: String) -> bool {
        let panel = self.panel_mut(dimension);
        panel.selected = selection;
        panel.result = None;
        panel.loading = panel.has_selection();
        panel.loading
    }

    /// Guardar la respuesta de una dimensión. Se descarta (false) si ya hay una
    /// petición más nueva para esa dimensión o si la página cambió.
    /// `None` = la petición falló: el panel queda en "No data available".
    pub fn apply_result(
        &mut self,
        dimension: Dimension,
        request: &RequestTicket,
        page: &RequestTicket,
        result: Option<DimensionResult>,
    ) -> bool {
        if !request.is_current() || !page.is_current() {
            return false;
        }
        let panel = self.panel_mut(dimension);
        panel.loading = false;
        panel.result = result;
        true
    }

    /// Cambiar el mes; devuelve las dimensiones con selección que hay que recargar
    pub fn set_month(&mut self, month: YearMonth) -> Vec<Dimension> {
        self.month = month;
        Dimension::ALL
            .into_iter()
            .filter(|d| {
                let panel = self.panel_mut(*d);
                panel.result = None;
                panel.loading = panel.has_selection();
                panel.loading
            })
            .collect()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(YearMonth::current())
    }
}

/// Una secuencia de peticiones por dimensión
#[derive(Clone, Default)]
pub struct DimensionGuards {
    employee: RequestGuard,
    team_lead: RequestGuard,
    director: RequestGuard,
}

impl DimensionGuards {
    pub fn get(&self, dimension: Dimension) -> &RequestGuard {
        match dimension {
            Dimension::Employee => &self.employee,
            Dimension::TeamLead => &self.team_lead,
            Dimension::Director => &self.director,
        }
    }

    pub fn invalidate_all(&self) {
        for dimension in Dimension::ALL {
            self.get(dimension).invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EffortSummary;
    use serde_json::json;

    fn march() -> YearMonth {
        YearMonth::new(2024, 3).unwrap()
    }

    #[test]
    fn clearing_selection_does_not_trigger_a_fetch() {
        let mut state = DashboardState::new(march());
        assert!(state.select(Dimension::TeamLead, "Zoe".into()));
        assert!(state.team_lead.loading);
        assert!(!state.select(Dimension::TeamLead, String::new()));
        assert!(!state.team_lead.loading);
    }

    #[test]
    fn month_change_reloads_only_selected_dimensions() {
        let mut state = DashboardState::new(march());
        state.select(Dimension::Employee, "3".into());
        state.select(Dimension::Director, "Dan".into());

        let reload = state.set_month(YearMonth::new(2024, 4).unwrap());
        assert_eq!(reload, vec![Dimension::Employee, Dimension::Director]);
        assert_eq!(state.month.to_backend_param(), "04-2024");
    }

    #[test]
    fn panel_without_summary_has_no_rows_and_zero_total() {
        let mut panel = DimensionPanel::default();
        assert_eq!(panel.rows(), None);
        assert_eq!(panel.total(), 0.0);

        panel.result = Some(DimensionResult {
            summary: Some(EffortSummary::from_value(json!({"{\"id\":1,\"name\":\"Design\"}": 8}))),
            total: 8.0,
        });
        let rows = panel.rows().unwrap();
        assert_eq!(rows[0].label, "Design");
        assert_eq!(panel.total(), 8.0);
    }

    fn result(total: f64) -> Option<DimensionResult> {
        Some(DimensionResult { summary: None, total })
    }

    #[test]
    fn slower_superseded_response_does_not_overwrite_newer_one() {
        let mut state = DashboardState::new(march());
        let guards = DimensionGuards::default();
        let page = RequestGuard::new().begin();

        state.select(Dimension::TeamLead, "Ann".into());
        let slow = guards.get(Dimension::TeamLead).begin();
        state.select(Dimension::TeamLead, "Bob".into());
        let fast = guards.get(Dimension::TeamLead).begin();

        assert!(state.apply_result(Dimension::TeamLead, &fast, &page, result(7.5)));
        assert!(!state.apply_result(Dimension::TeamLead, &slow, &page, result(40.0)));

        assert_eq!(state.team_lead.selected, "Bob");
        assert_eq!(state.team_lead.total(), 7.5);
        assert!(!state.team_lead.loading);
    }

    #[test]
    fn response_after_leaving_the_page_is_dropped() {
        let mut state = DashboardState::new(march());
        let guards = DimensionGuards::default();
        let pages = RequestGuard::new();
        let page = pages.begin();

        state.select(Dimension::Employee, "3".into());
        let request = guards.get(Dimension::Employee).begin();
        pages.begin();

        assert!(!state.apply_result(Dimension::Employee, &request, &page, result(8.0)));
        assert!(state.employee.result.is_none());
        assert!(state.employee.loading);
    }

    #[test]
    fn failed_request_clears_loading_without_data() {
        let mut state = DashboardState::new(march());
        let page = RequestGuard::new().begin();
        state.select(Dimension::Director, "Dan".into());
        let request = DimensionGuards::default().get(Dimension::Director).begin();

        assert!(state.apply_result(Dimension::Director, &request, &page, None));
        assert!(!state.director.loading);
        assert_eq!(state.director.rows(), None);
    }

    #[test]
    fn guards_are_independent_per_dimension() {
        let guards = DimensionGuards::default();
        let employee = guards.get(Dimension::Employee).begin();
        let director = guards.get(Dimension::Director).begin();
        guards.get(Dimension::Director).begin();

        assert!(employee.is_current());
        assert!(!director.is_current());

        guards.invalidate_all();
        assert!(!employee.is_current());
    }
}
