// ============================================================================
// EMPLOYEE DETAIL VIEW - Ficha del empleado y sus worklogs
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{confirm, on_change, ElementBuilder};
use crate::models::{Employee, Worklog};
use crate::state::{AppState, RequestTicket, Route};
use crate::utils::constants::{
    CONFIRM_DELETE_WORKLOG, MSG_DELETE_WORKLOG_FAILED, MSG_EMPLOYEE_NOT_FOUND, MSG_FETCH_EMPLOYEE_DATA_FAILED,
    NOT_AVAILABLE,
};
use crate::utils::dates::YearMonth;
use crate::viewmodels::{format_effort, EmployeeDetailViewModel};
use crate::views::shared::{
    render_alert, render_button, render_cell, render_empty_row, render_link, render_optional_alert,
    render_page_header, render_spinner, render_table, AlertKind,
};

const WORKLOG_HEADERS: [&str; 5] = ["ID", "Month", "Type", "Effort (h)", "Actions"];

pub fn load_employee_detail(state: &AppState, employee_id: i64, ticket: RequestTicket) {
    let state = state.clone();
    spawn_local(async move {
        let result = EmployeeDetailViewModel::new().load(employee_id, None).await;
        if !ticket.is_current() {
            return;
        }
        {
            let mut detail = state.employee_detail.borrow_mut();
            detail.loading = false;
            match result {
                Ok(data) => {
                    detail.employee = Some(data.employee);
                    detail.worklogs = data.worklogs;
                }
                Err(e) if e.is_not_found() => {
                    log::warn!("⚠️ [DETAIL] Empleado {} no existe", employee_id);
                    detail.error = Some(MSG_EMPLOYEE_NOT_FOUND.to_string());
                }
                Err(e) => {
                    log::error!("❌ [DETAIL] Error cargando empleado {}: {}", employee_id, e);
                    detail.error = Some(MSG_FETCH_EMPLOYEE_DATA_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

/// Recargar solo los worklogs (filtro por mes)
fn reload_worklogs(state: &AppState, employee_id: i64, month: Option<YearMonth>) {
    let page = state.page_guard.current();
    let ticket = state.reload_guard.begin();
    let state = state.clone();
    spawn_local(async move {
        let result = EmployeeDetailViewModel::new()
            .load_worklogs(employee_id, month.as_ref())
            .await;
        if !page.is_current() || !ticket.is_current() {
            return;
        }
        {
            let mut detail = state.employee_detail.borrow_mut();
            match result {
                Ok(worklogs) => {
                    detail.worklogs = worklogs;
                    detail.error = None;
                }
                Err(e) => {
                    log::error!("❌ [DETAIL] Error filtrando worklogs de {}: {}", employee_id, e);
                    detail.error = Some(MSG_FETCH_EMPLOYEE_DATA_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

fn delete_worklog(state: &AppState, worklog_id: i64) {
    if !confirm(CONFIRM_DELETE_WORKLOG) {
        return;
    }
    let page = state.page_guard.current();
    let state = state.clone();
    spawn_local(async move {
        let result = EmployeeDetailViewModel::new().delete_worklog(worklog_id).await;
        if !page.is_current() {
            return;
        }
        match result {
            Ok(()) => {
                log::info!("🗑️ [DETAIL] Worklog {} eliminado", worklog_id);
                state.employee_detail.borrow_mut().remove_worklog(worklog_id);
            }
            Err(e) => {
                log::error!("❌ [DETAIL] Error eliminando worklog {}: {}", worklog_id, e);
                state.employee_detail.borrow_mut().error = Some(MSG_DELETE_WORKLOG_FAILED.to_string());
            }
        }
        state.notify_subscribers();
    });
}

pub fn render_employee_detail(state: &AppState, employee_id: i64) -> Result<Element, JsValue> {
    let detail = state.employee_detail.borrow();

    let back = render_link(&Route::Employees.to_hash(), "btn btn-secondary", "Back to list")?;
    let container = ElementBuilder::new("div")?.class("employee-detail");

    if detail.loading {
        return Ok(container
            .child(render_page_header("Employee Details", vec![back])?)?
            .child(render_spinner("Loading...")?)?
            .build());
    }

    let Some(employee) = detail.employee.as_ref() else {
        let message = detail.error.as_deref().unwrap_or(MSG_EMPLOYEE_NOT_FOUND);
        return Ok(container
            .child(render_page_header("Employee Details", vec![back])?)?
            .child(render_alert(AlertKind::Error, message)?)?
            .build());
    };

    let actions = vec![
        render_link(&Route::EmployeeEdit(employee_id).to_hash(), "btn btn-primary", "Edit")?,
        render_link(
            &Route::WorklogNew { employee_id: Some(employee_id) }.to_hash(),
            "btn btn-outline",
            "Add Worklog",
        )?,
        back,
    ];

    Ok(container
        .child(render_page_header(&employee.full_name(), actions)?)?
        .child_opt(render_optional_alert(AlertKind::Error, detail.error.as_deref())?)?
        .child(render_info_card(employee)?)?
        .child(render_worklogs(state, employee_id, &detail.worklogs, &detail.month_filter)?)?
        .build())
}

fn render_info_card(employee: &Employee) -> Result<Element, JsValue> {
    let status = employee.status();
    let fields: [(&str, String); 7] = [
        ("ID", employee.id.to_string()),
        ("Grade", employee.grade_name().unwrap_or(NOT_AVAILABLE).to_string()),
        ("Team Lead", employee.team_lead_name().unwrap_or(NOT_AVAILABLE).to_string()),
        ("Director", employee.director_name().unwrap_or(NOT_AVAILABLE).to_string()),
        ("Start Date", EmployeeDetailViewModel::date_label(employee.start_date.as_deref())),
        ("End Date", EmployeeDetailViewModel::date_label(employee.end_date.as_deref())),
        ("Status", status.label().to_string()),
    ];

    let mut items = Vec::with_capacity(fields.len() * 2);
    for (label, value) in fields {
        items.push(ElementBuilder::new("dt")?.text(label).build());
        let class = if label == "Status" { status.badge_class() } else { "" };
        items.push(
            ElementBuilder::new("dd")?
                .child(ElementBuilder::new("span")?.class(class).text(&value).build())?
                .build(),
        );
    }

    Ok(ElementBuilder::new("div")?
        .class("card")
        .child(ElementBuilder::new("dl")?.class("info-grid").children(items)?.build())?
        .build())
}

fn render_worklogs(
    state: &AppState,
    employee_id: i64,
    worklogs: &[Worklog],
    month_filter: &str,
) -> Result<Element, JsValue> {
    let rows = if worklogs.is_empty() {
        vec![render_empty_row(WORKLOG_HEADERS.len(), "No worklogs found")?]
    } else {
        worklogs
            .iter()
            .map(|w| render_worklog_row(state, w))
            .collect::<Result<Vec<_>, _>>()?
    };

    let total = ElementBuilder::new("p")?
        .class("total-hours")
        .text(&format!(
            "Total effort: {} h",
            format_effort(EmployeeDetailViewModel::total_effort(worklogs))
        ))
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card")
        .child(
            ElementBuilder::new("div")?
                .class("card-header")
                .child(ElementBuilder::new("h3")?.text("Worklogs").build())?
                .child(render_month_filter(state, employee_id, month_filter)?)?
                .build(),
        )?
        .child(render_table(&WORKLOG_HEADERS, rows, None)?)?
        .child(total)?
        .build())
}

fn render_month_filter(state: &AppState, employee_id: i64, value: &str) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id("worklogMonthFilter")?
        .class("form-control")
        .attr("type", "month")?
        .attr("value", value)?
        .build();

    let state_filter = state.clone();
    on_change(&input, move |value| {
        let month = if value.trim().is_empty() {
            None
        } else {
            match YearMonth::parse_input(&value) {
                Ok(month) => Some(month),
                Err(e) => {
                    log::warn!("⚠️ [DETAIL] Filtro de mes ignorado '{}': {}", value, e);
                    return;
                }
            }
        };
        state_filter.employee_detail.borrow_mut().month_filter = value;
        reload_worklogs(&state_filter, employee_id, month);
    })?;

    let state_clear = state.clone();
    let clear = render_button("btn btn-sm btn-secondary", "All months", move || {
        state_clear.employee_detail.borrow_mut().month_filter.clear();
        reload_worklogs(&state_clear, employee_id, None);
        state_clear.notify_subscribers();
    })?;

    Ok(ElementBuilder::new("div")?
        .class("month-filter")
        .child(input)?
        .child(clear)?
        .build())
}

fn render_worklog_row(state: &AppState, worklog: &Worklog) -> Result<Element, JsValue> {
    let worklog_id = worklog.id;
    let state_clone = state.clone();
    let actions = ElementBuilder::new("td")?
        .class("actions")
        .child(render_link(&Route::WorklogEdit(worklog_id).to_hash(), "btn btn-sm btn-outline", "Edit")?)?
        .child(render_button("btn btn-sm btn-danger", "Delete", move || {
            delete_worklog(&state_clone, worklog_id);
        })?)?
        .build();

    Ok(ElementBuilder::new("tr")?
        .child(render_cell(&worklog_id.to_string())?)?
        .child(render_cell(&EmployeeDetailViewModel::month_label(worklog))?)?
        .child(render_cell(EmployeeDetailViewModel::type_label(worklog))?)?
        .child(render_cell(&format_effort(worklog.effort))?)?
        .child(actions)?
        .build())
}
