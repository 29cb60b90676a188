// ============================================================================
// EMPLOYEE LIST VIEW - Estadísticas, buscador, tabla y modal de borrado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_input, replace_children, set_text_content, ElementBuilder};
use crate::models::Employee;
use crate::state::{AppState, EmployeeListState, IncrementalUpdate, RequestTicket, Route, UpdateType};
use crate::utils::constants::{MSG_DELETE_EMPLOYEE_FAILED, MSG_EMPLOYEE_DELETED, MSG_FETCH_EMPLOYEES_FAILED};
use crate::viewmodels::{EmployeeListViewModel, EmployeeStats};
use crate::views::shared::{
    render_button, render_cell, render_empty_row, render_link, render_modal, render_optional_alert,
    render_page_header, render_spinner, render_table, schedule, AlertKind,
};

const TABLE_BODY_ID: &str = "employee-table-body";
const RESULT_COUNT_ID: &str = "employee-result-count";
const HEADERS: [&str; 6] = ["Employee", "Grade", "Manager", "Start Date", "Status", "Actions"];

pub fn load_employee_list(state: &AppState, ticket: RequestTicket) {
    let state = state.clone();
    spawn_local(async move {
        let result = EmployeeListViewModel::new().load_employees().await;
        if !ticket.is_current() {
            return;
        }
        {
            let mut list = state.employee_list.borrow_mut();
            list.loading = false;
            match result {
                Ok(employees) => list.employees = employees,
                Err(e) => {
                    log::error!("❌ [EMPLOYEES] Error cargando empleados: {}", e);
                    list.error = Some(MSG_FETCH_EMPLOYEES_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

fn delete_employee(state: &AppState, employee_id: i64) {
    state.employee_list.borrow_mut().deleting = true;
    state.notify_subscribers();

    let page = state.page_guard.current();
    let state = state.clone();
    spawn_local(async move {
        let result = EmployeeListViewModel::new().delete_employee(employee_id).await;
        if !page.is_current() {
            return;
        }

        match result {
            Ok(()) => {
                log::info!("🗑️ [EMPLOYEES] Empleado {} eliminado", employee_id);
                let flash_seq = state.employee_list.borrow_mut().apply_delete(employee_id, MSG_EMPLOYEE_DELETED);

                let state_for_flash = state.clone();
                schedule(CONFIG.flash_duration_ms, move || {
                    if !page.is_current() {
                        return;
                    }
                    let expired = state_for_flash.employee_list.borrow_mut().expire_flash(flash_seq);
                    if expired {
                        state_for_flash.notify_subscribers();
                    }
                });
            }
            Err(e) => {
                log::error!("❌ [EMPLOYEES] Error eliminando empleado {}: {}", employee_id, e);
                let mut list = state.employee_list.borrow_mut();
                list.error = Some(MSG_DELETE_EMPLOYEE_FAILED.to_string());
                list.pending_delete = None;
                list.deleting = false;
            }
        }
        state.notify_subscribers();
    });
}

pub fn render_employee_list(state: &AppState) -> Result<Element, JsValue> {
    let list = state.employee_list.borrow();

    let header = render_page_header(
        "Employees",
        vec![render_link(&Route::EmployeeNew.to_hash(), "btn btn-primary", "Add Employee")?],
    )?;

    let container = ElementBuilder::new("div")?
        .class("employee-list")
        .child(header)?
        .child_opt(render_optional_alert(AlertKind::Success, list.flash.as_deref())?)?
        .child_opt(render_optional_alert(AlertKind::Error, list.error.as_deref())?)?;

    if list.loading {
        return Ok(container.child(render_spinner("Loading employees...")?)?.build());
    }

    let table = render_table(&HEADERS, render_rows(state, &list)?, Some(TABLE_BODY_ID))?;
    let container = container
        .child(render_stats(&list.stats())?)?
        .child(render_search(state, &list)?)?
        .child(ElementBuilder::new("div")?.class("table-responsive").child(table)?.build())?
        .child_opt(list.pending_delete.as_ref().map(|e| render_delete_modal(state, e, list.deleting)).transpose()?)?;

    Ok(container.build())
}

/// Actualización incremental al escribir en el buscador: solo filas + contador
pub fn update_employee_table(state: &AppState) -> Result<(), JsValue> {
    let list = state.employee_list.borrow();
    let body = get_element_by_id(TABLE_BODY_ID).ok_or_else(|| JsValue::from_str("needs full render"))?;
    replace_children(&body, render_rows(state, &list)?)?;
    if let Some(count) = get_element_by_id(RESULT_COUNT_ID) {
        set_text_content(&count, &EmployeeListViewModel::result_count_label(list.visible().len()));
    }
    Ok(())
}

fn render_stats(stats: &EmployeeStats) -> Result<Element, JsValue> {
    let mut cards = Vec::with_capacity(3);
    for (label, value, class) in [
        ("Total Employees", stats.total, "stat-card"),
        ("Active", stats.active, "stat-card stat-active"),
        ("Inactive", stats.inactive, "stat-card stat-inactive"),
    ] {
        cards.push(
            ElementBuilder::new("div")?
                .class(class)
                .child(ElementBuilder::new("span")?.class("stat-value").text(&value.to_string()).build())?
                .child(ElementBuilder::new("span")?.class("stat-label").text(label).build())?
                .build(),
        );
    }
    Ok(ElementBuilder::new("div")?.class("stats-grid").children(cards)?.build())
}

fn render_search(state: &AppState, list: &EmployeeListState) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id("employee-search")?
        .class("form-control")
        .attr("type", "search")?
        .attr("placeholder", "Search by name...")?
        .attr("value", &list.search)?
        .build();

    let state_clone = state.clone();
    on_input(&input, move |value| {
        state_clone.employee_list.borrow_mut().search = value;
        state_clone.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::EmployeeTable));
    })?;

    let count = ElementBuilder::new("span")?
        .id(RESULT_COUNT_ID)?
        .class("text-muted")
        .text(&EmployeeListViewModel::result_count_label(list.visible().len()))
        .build();

    Ok(ElementBuilder::new("div")?
        .class("search-bar")
        .child(input)?
        .child(count)?
        .build())
}

fn render_rows(state: &AppState, list: &EmployeeListState) -> Result<Vec<Element>, JsValue> {
    let visible = list.visible();
    if visible.is_empty() {
        return Ok(vec![render_empty_row(HEADERS.len(), "No employees found")?]);
    }
    visible.into_iter().map(|e| render_row(state, e)).collect()
}

fn render_row(state: &AppState, employee: &Employee) -> Result<Element, JsValue> {
    let avatar = ElementBuilder::new("div")?
        .class("avatar")
        .text(&employee.initials())
        .build();
    let name = ElementBuilder::new("div")?
        .class("employee-name")
        .child(render_link(&Route::EmployeeDetail(employee.id).to_hash(), "", &employee.full_name())?)?
        .child(
            ElementBuilder::new("small")?
                .class("text-muted")
                .text(EmployeeListViewModel::team_lead_caption(employee))
                .build(),
        )?
        .build();
    let identity = ElementBuilder::new("td")?
        .child(ElementBuilder::new("div")?.class("employee-cell").child(avatar)?.child(name)?.build())?
        .build();

    let grade = ElementBuilder::new("td")?
        .child(
            ElementBuilder::new("span")?
                .class("badge badge-grade")
                .text(EmployeeListViewModel::grade_label(employee))
                .build(),
        )?
        .build();

    let status = employee.status();
    let status_cell = ElementBuilder::new("td")?
        .child(ElementBuilder::new("span")?.class(status.badge_class()).text(status.label()).build())?
        .build();

    let id = employee.id;
    let state_clone = state.clone();
    let employee_clone = employee.clone();
    let actions = ElementBuilder::new("td")?
        .class("actions")
        .child(render_link(&Route::EmployeeDetail(id).to_hash(), "btn btn-sm btn-outline", "View")?)?
        .child(render_link(&Route::EmployeeEdit(id).to_hash(), "btn btn-sm btn-outline", "Edit")?)?
        .child(render_link(
            &Route::WorklogNew { employee_id: Some(id) }.to_hash(),
            "btn btn-sm btn-outline",
            "Add Worklog",
        )?)?
        .child(render_button("btn btn-sm btn-danger", "Delete", move || {
            state_clone.employee_list.borrow_mut().pending_delete = Some(employee_clone.clone());
            state_clone.notify_subscribers();
        })?)?
        .build();

    Ok(ElementBuilder::new("tr")?
        .child(identity)?
        .child(grade)?
        .child(render_cell(EmployeeListViewModel::manager_label(employee))?)?
        .child(render_cell(&EmployeeListViewModel::start_date_label(employee))?)?
        .child(status_cell)?
        .child(actions)?
        .build())
}

fn render_delete_modal(state: &AppState, employee: &Employee, deleting: bool) -> Result<Element, JsValue> {
    let message = ElementBuilder::new("p")?
        .text(&format!("Are you sure you want to delete {}?", employee.full_name()))
        .build();

    let state_cancel = state.clone();
    let cancel = render_button("btn btn-secondary", "Cancel", move || {
        let mut list = state_cancel.employee_list.borrow_mut();
        if !list.deleting {
            list.pending_delete = None;
        }
        drop(list);
        state_cancel.notify_subscribers();
    })?;

    let state_confirm = state.clone();
    let employee_id = employee.id;
    let confirm = render_button(
        "btn btn-danger",
        if deleting { "Deleting..." } else { "Delete" },
        move || {
            if state_confirm.employee_list.borrow().deleting {
                return;
            }
            delete_employee(&state_confirm, employee_id);
        },
    )?;
    if deleting {
        confirm.set_attribute("disabled", "")?;
    }

    render_modal("Confirm Delete", vec![message], vec![cancel, confirm])
}
