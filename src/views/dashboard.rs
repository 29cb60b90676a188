// ============================================================================
// DASHBOARD VIEW - Horas por tipo de worklog (empleado / team lead / director)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_change, ElementBuilder};
use crate::state::{AppState, DimensionPanel, RequestTicket};
use crate::utils::constants::{MSG_FETCH_INITIAL_DATA_FAILED, NO_DATA_AVAILABLE};
use crate::utils::dates::YearMonth;
use crate::viewmodels::{format_effort, DashboardOptions, DashboardViewModel, Dimension};
use crate::views::shared::{
    render_alert, render_cell, render_empty_row, render_page_header, render_select, render_spinner,
    render_table, AlertKind,
};

/// Carga inicial: empleados + team leads / directores distintos
pub fn load_dashboard(state: &AppState, ticket: RequestTicket) {
    let state = state.clone();
    spawn_local(async move {
        let result = DashboardViewModel::new().load_options().await;
        if !ticket.is_current() {
            log::debug!("⏭️ [DASHBOARD] Carga inicial obsoleta descartada");
            return;
        }

        {
            let mut dashboard = state.dashboard.borrow_mut();
            dashboard.loading = false;
            match result {
                Ok(options) => {
                    log::info!(
                        "✅ [DASHBOARD] {} empleados, {} team leads, {} directores",
                        options.employees.len(),
                        options.team_leads.len(),
                        options.directors.len()
                    );
                    dashboard.options = options;
                }
                Err(e) => {
                    log::error!("❌ [DASHBOARD] Error cargando datos iniciales: {}", e);
                    dashboard.error = Some(MSG_FETCH_INITIAL_DATA_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

/// Resumen + total de una dimensión. Solo la última petición escribe en el estado.
fn load_dimension(state: &AppState, dimension: Dimension) {
    let (selection, month) = {
        let dashboard = state.dashboard.borrow();
        (dashboard.panel(dimension).selected.clone(), dashboard.month)
    };

    let page = state.page_guard.current();
    let ticket = state.dimension_guards.get(dimension).begin();
    let state = state.clone();

    spawn_local(async move {
        let result = DashboardViewModel::new().load_dimension(dimension, &selection, &month).await;
        let data = match result {
            Ok(data) => Some(data),
            // Solo log: el panel queda en "No data available"
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error cargando {} '{}': {}", dimension.log_tag(), selection, e);
                None
            }
        };

        let applied = state
            .dashboard
            .borrow_mut()
            .apply_result(dimension, &ticket, &page, data);
        if !applied {
            log::debug!(
                "⏭️ [DASHBOARD] Respuesta obsoleta de {} (petición #{}) descartada",
                dimension.log_tag(),
                ticket.id()
            );
            return;
        }
        state.notify_subscribers();
    });
}

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let dashboard = state.dashboard.borrow();

    let container = ElementBuilder::new("div")?
        .class("dashboard")
        .child(render_page_header("Dashboard", vec![render_month_picker(state, &dashboard.month)?])?)?;

    if let Some(error) = &dashboard.error {
        return Ok(container.child(render_alert(AlertKind::Error, error)?)?.build());
    }
    if dashboard.loading {
        return Ok(container.child(render_spinner("Loading...")?)?.build());
    }

    let mut panels = Vec::with_capacity(Dimension::ALL.len());
    for dimension in Dimension::ALL {
        panels.push(render_panel(state, dimension, dashboard.panel(dimension), &dashboard.options)?);
    }

    Ok(container
        .child(ElementBuilder::new("div")?.class("dashboard-grid").children(panels)?.build())?
        .build())
}

fn render_month_picker(state: &AppState, month: &YearMonth) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id("dashboardMonth")?
        .class("form-control")
        .attr("type", "month")?
        .attr("value", &month.to_input_value())?
        .build();

    let state_clone = state.clone();
    on_change(&input, move |value| match YearMonth::parse_input(&value) {
        Ok(month) => {
            let reload = state_clone.dashboard.borrow_mut().set_month(month);
            for dimension in reload {
                load_dimension(&state_clone, dimension);
            }
            state_clone.notify_subscribers();
        }
        Err(e) => log::warn!("⚠️ [DASHBOARD] Mes ignorado '{}': {}", value, e),
    })?;

    ElementBuilder::new("label")?
        .class("month-picker")
        .child(ElementBuilder::new("span")?.text("Month").build())?
        .child(input)
        .map(ElementBuilder::build)
}

fn selector_options(dimension: Dimension, options: &DashboardOptions) -> Vec<(String, String)> {
    match dimension {
        Dimension::Employee => options
            .employees
            .iter()
            .map(|e| (e.id.to_string(), e.full_name()))
            .collect(),
        Dimension::TeamLead => options.team_leads.iter().map(|n| (n.clone(), n.clone())).collect(),
        Dimension::Director => options.directors.iter().map(|n| (n.clone(), n.clone())).collect(),
    }
}

fn render_panel(
    state: &AppState,
    dimension: Dimension,
    panel: &DimensionPanel,
    options: &DashboardOptions,
) -> Result<Element, JsValue> {
    let state_clone = state.clone();
    let select = render_select(
        dimension.element_id(),
        dimension.select_label(),
        selector_options(dimension, options),
        &panel.selected,
        false,
        move |value| {
            let needs_fetch = state_clone.dashboard.borrow_mut().select(dimension, value);
            if needs_fetch {
                load_dimension(&state_clone, dimension);
            } else {
                // Selección vacía: cualquier respuesta en vuelo queda obsoleta
                state_clone.dimension_guards.get(dimension).invalidate();
            }
            state_clone.notify_subscribers();
        },
    )?;

    let body = if panel.loading {
        render_spinner("Loading...")?
    } else {
        render_panel_data(panel)?
    };

    Ok(ElementBuilder::new("div")?
        .class("card dashboard-card")
        .child(ElementBuilder::new("h3")?.class("card-title").text(dimension.title()).build())?
        .child(select)?
        .child(body)?
        .build())
}

fn render_panel_data(panel: &DimensionPanel) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("card-body");
    if !panel.has_selection() {
        return Ok(container.build());
    }

    let total = ElementBuilder::new("div")?
        .class("total-hours")
        .child(ElementBuilder::new("span")?.class("total-label").text("Total Hours").build())?
        .child(ElementBuilder::new("strong")?.class("total-value").text(&format_effort(panel.total())).build())?
        .build();

    let summary = match panel.rows() {
        None => ElementBuilder::new("p")?.class("text-muted").text(NO_DATA_AVAILABLE).build(),
        Some(rows) if rows.is_empty() => {
            render_table(&["Worklog Type", "Hours"], vec![render_empty_row(2, NO_DATA_AVAILABLE)?], None)?
        }
        Some(rows) => {
            let mut elements = Vec::with_capacity(rows.len());
            for row in rows {
                elements.push(
                    ElementBuilder::new("tr")?
                        .child(render_cell(&row.label)?)?
                        .child(render_cell(&row.hours)?)?
                        .build(),
                );
            }
            render_table(&["Worklog Type", "Hours"], elements, None)?
        }
    };

    Ok(container.child(total)?.child(summary)?.build())
}
