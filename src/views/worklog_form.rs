// ============================================================================
// WORKLOG FORM VIEW - Alta / edición de worklog
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{on_input, on_submit, ElementBuilder};
use crate::state::{navigate, AppState, RequestTicket, Route, WorklogFormState};
use crate::utils::constants::{MSG_LOAD_FORM_FAILED, MSG_SAVE_WORKLOG_FAILED, MSG_WORKLOG_SAVED};
use crate::viewmodels::{WorklogField, WorklogForm, WorklogFormViewModel};
use crate::views::shared::{
    render_field, render_link, render_optional_alert, render_page_header, render_select, render_spinner,
    schedule, AlertKind,
};

pub fn load_worklog_form(state: &AppState, ticket: RequestTicket) {
    let editing = state.worklog_form.borrow().editing;
    let state = state.clone();
    spawn_local(async move {
        let result = WorklogFormViewModel::new().load(editing).await;
        if !ticket.is_current() {
            return;
        }
        {
            let mut form_state = state.worklog_form.borrow_mut();
            form_state.loading = false;
            match result {
                Ok(data) => {
                    if let Some(worklog) = &data.worklog {
                        form_state.form = WorklogForm::from_worklog(worklog);
                    }
                    form_state.employees = data.employees;
                    form_state.worklog_types = data.worklog_types;
                }
                Err(e) => {
                    log::error!("❌ [WORKLOG-FORM] Error cargando formulario: {}", e);
                    form_state.error = Some(MSG_LOAD_FORM_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

fn submit(state: &AppState) {
    let (editing, payload) = {
        let mut form_state = state.worklog_form.borrow_mut();
        if form_state.saving {
            return;
        }
        let payload = form_state.form.to_payload();
        match payload {
            Ok(payload) => {
                form_state.saving = true;
                form_state.error = None;
                (form_state.editing, payload)
            }
            Err(validation) => {
                form_state.error = Some(validation.to_string());
                drop(form_state);
                state.notify_subscribers();
                return;
            }
        }
    };
    state.notify_subscribers();

    let employee_id = payload.employee.id;
    let page = state.page_guard.current();
    let state = state.clone();
    spawn_local(async move {
        let result = WorklogFormViewModel::new().save(editing, &payload).await;
        if !page.is_current() {
            return;
        }
        {
            let mut form_state = state.worklog_form.borrow_mut();
            form_state.saving = false;
            match result {
                Ok(()) => {
                    log::info!("✅ [WORKLOG-FORM] Worklog guardado para empleado {}", employee_id);
                    form_state.success = Some(MSG_WORKLOG_SAVED.to_string());
                    schedule(CONFIG.redirect_delay_ms, move || {
                        if page.is_current() {
                            if let Err(e) = navigate(&Route::EmployeeDetail(employee_id)) {
                                log::error!("❌ [WORKLOG-FORM] Error navegando: {:?}", e);
                            }
                        }
                    });
                }
                Err(e) => {
                    log::error!("❌ [WORKLOG-FORM] Error guardando worklog: {}", e);
                    form_state.error = Some(MSG_SAVE_WORKLOG_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

pub fn render_worklog_form(state: &AppState) -> Result<Element, JsValue> {
    let form_state = state.worklog_form.borrow();

    let cancel_target = match form_state.preselected_employee {
        Some(id) => Route::EmployeeDetail(id),
        None => Route::Employees,
    };
    let header = render_page_header(
        form_state.title(),
        vec![render_link(&cancel_target.to_hash(), "btn btn-secondary", "Cancel")?],
    )?;

    let container = ElementBuilder::new("div")?
        .class("worklog-form")
        .child(header)?
        .child_opt(render_optional_alert(AlertKind::Success, form_state.success.as_deref())?)?
        .child_opt(render_optional_alert(AlertKind::Error, form_state.error.as_deref())?)?;

    if form_state.loading {
        return Ok(container.child(render_spinner("Loading...")?)?.build());
    }

    Ok(container.child(render_form(state, &form_state)?)?.build())
}

fn select_handler(state: &AppState, field: WorklogField) -> impl FnMut(String) + 'static {
    let state = state.clone();
    move |value| state.worklog_form.borrow_mut().form.set_field(field, value)
}

fn render_form(state: &AppState, form_state: &WorklogFormState) -> Result<Element, JsValue> {
    let form = &form_state.form;

    let employee_options = form_state
        .employees
        .iter()
        .map(|e| (e.id.to_string(), e.full_name()))
        .collect();
    let employee_select = render_select(
        "employee",
        "Select an employee",
        employee_options,
        &form.employee_id,
        form_state.employee_locked(),
        select_handler(state, WorklogField::Employee),
    )?;

    let type_options = form_state
        .worklog_types
        .iter()
        .map(|t| (t.id.to_string(), t.name.clone()))
        .collect();
    let type_select = render_select(
        "worklogType",
        "Select a worklog type",
        type_options,
        &form.worklog_type_id,
        false,
        select_handler(state, WorklogField::WorklogType),
    )?;

    let month_input = ElementBuilder::new("input")?
        .id("monthDate")?
        .class("form-control")
        .attr("type", "month")?
        .attr("value", &form.month)?
        .build();
    on_input(&month_input, select_handler(state, WorklogField::Month))?;

    let effort_input = ElementBuilder::new("input")?
        .id("effort")?
        .class("form-control")
        .attr("type", "number")?
        .attr("min", "0")?
        .attr("step", "0.5")?
        .attr("value", &form.effort)?
        .build();
    on_input(&effort_input, select_handler(state, WorklogField::Effort))?;

    let submit_button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .attr_if(form_state.saving, "disabled")?
        .text(if form_state.saving { "Saving..." } else { "Save Worklog" })
        .build();

    let element = ElementBuilder::new("form")?
        .class("card form")
        .attr("novalidate", "")?
        .child(render_field("Employee", employee_select, true)?)?
        .child(render_field("Worklog Type", type_select, true)?)?
        .child(render_field("Month", month_input, true)?)?
        .child(render_field("Effort (hours)", effort_input, true)?)?
        .child(submit_button)?
        .build();

    let state_submit = state.clone();
    on_submit(&element, move || submit(&state_submit))?;
    Ok(element)
}
