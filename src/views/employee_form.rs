// ============================================================================
// EMPLOYEE FORM VIEW - Alta / edición de empleado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{on_submit, ElementBuilder};
use crate::state::{navigate, AppState, EmployeeFormState, RequestTicket, Route};
use crate::utils::constants::{
    MSG_EMPLOYEE_CREATED, MSG_EMPLOYEE_UPDATED, MSG_LOAD_FORM_FAILED, MSG_SAVE_EMPLOYEE_FAILED,
};
use crate::viewmodels::{EmployeeField, EmployeeForm, EmployeeFormViewModel};
use crate::views::shared::{
    render_field, render_link, render_optional_alert, render_page_header, render_select, render_spinner,
    render_text_input, schedule, AlertKind,
};

pub fn load_employee_form(state: &AppState, ticket: RequestTicket) {
    let editing = state.employee_form.borrow().editing;
    let state = state.clone();
    spawn_local(async move {
        let result = EmployeeFormViewModel::new().load(editing).await;
        if !ticket.is_current() {
            return;
        }
        {
            let mut form_state = state.employee_form.borrow_mut();
            form_state.loading = false;
            match result {
                Ok((grades, employee)) => {
                    if let Some(employee) = employee {
                        form_state.form = EmployeeForm::from_employee(&employee, &grades);
                    }
                    form_state.grades = grades;
                }
                Err(e) => {
                    log::error!("❌ [EMPLOYEE-FORM] Error cargando formulario: {}", e);
                    form_state.error = Some(MSG_LOAD_FORM_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

fn submit(state: &AppState) {
    let (editing, payload) = {
        let mut form_state = state.employee_form.borrow_mut();
        if form_state.saving {
            return;
        }
        let payload = form_state.form.to_payload(&form_state.grades, form_state.is_editing());
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

    let page = state.page_guard.current();
    let state = state.clone();
    spawn_local(async move {
        let result = EmployeeFormViewModel::new().save(editing, &payload).await;
        if !page.is_current() {
            return;
        }
        {
            let mut form_state = state.employee_form.borrow_mut();
            form_state.saving = false;
            match result {
                Ok(()) => {
                    let message = if editing.is_some() { MSG_EMPLOYEE_UPDATED } else { MSG_EMPLOYEE_CREATED };
                    log::info!("✅ [EMPLOYEE-FORM] {}", message);
                    form_state.success = Some(message.to_string());
                    schedule(CONFIG.redirect_delay_ms, move || {
                        if page.is_current() {
                            if let Err(e) = navigate(&Route::Employees) {
                                log::error!("❌ [EMPLOYEE-FORM] Error navegando: {:?}", e);
                            }
                        }
                    });
                }
                Err(e) => {
                    log::error!("❌ [EMPLOYEE-FORM] Error guardando empleado: {}", e);
                    form_state.error = Some(MSG_SAVE_EMPLOYEE_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

pub fn render_employee_form(state: &AppState) -> Result<Element, JsValue> {
    let form_state = state.employee_form.borrow();

    let header = render_page_header(
        form_state.title(),
        vec![render_link(&Route::Employees.to_hash(), "btn btn-secondary", "Cancel")?],
    )?;

    let container = ElementBuilder::new("div")?
        .class("employee-form")
        .child(header)?
        .child_opt(render_optional_alert(AlertKind::Success, form_state.success.as_deref())?)?
        .child_opt(render_optional_alert(AlertKind::Error, form_state.error.as_deref())?)?;

    if form_state.loading {
        return Ok(container.child(render_spinner("Loading...")?)?.build());
    }

    Ok(container.child(render_form(state, &form_state)?)?.build())
}

fn text_field(
    state: &AppState,
    form: &EmployeeForm,
    field: EmployeeField,
    label: &str,
    input_type: &str,
    required: bool,
) -> Result<Element, JsValue> {
    let state_clone = state.clone();
    let input = render_text_input(field.name(), input_type, &form.value(field), move |value| {
        // Sin re-render: el input ya muestra el valor
        state_clone.employee_form.borrow_mut().form.set_field(field, value);
    })?;
    render_field(label, input, required)
}

fn render_form(state: &AppState, form_state: &EmployeeFormState) -> Result<Element, JsValue> {
    let form = &form_state.form;

    let grade_options = form_state
        .grades
        .iter()
        .map(|g| (g.id.to_string(), g.name.clone()))
        .collect();
    let state_grade = state.clone();
    let grade_select = render_select(
        EmployeeField::Grade.name(),
        "Select a grade",
        grade_options,
        &form.value(EmployeeField::Grade),
        false,
        move |value| {
            state_grade.employee_form.borrow_mut().form.set_field(EmployeeField::Grade, value);
        },
    )?;

    let submit_label = match (form_state.saving, form_state.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Update Employee",
        (false, false) => "Create Employee",
    };
    let submit_button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .attr_if(form_state.saving, "disabled")?
        .text(submit_label)
        .build();

    let element = ElementBuilder::new("form")?
        .class("card form")
        .attr("novalidate", "")?
        .child(text_field(state, form, EmployeeField::FirstName, "First Name", "text", true)?)?
        .child(text_field(state, form, EmployeeField::LastName, "Last Name", "text", true)?)?
        .child(text_field(state, form, EmployeeField::TeamLead, "Team Lead", "text", false)?)?
        .child(text_field(state, form, EmployeeField::Director, "Director", "text", false)?)?
        .child(render_field("Grade", grade_select, !form_state.is_editing())?)?
        .child(text_field(state, form, EmployeeField::StartDate, "Start Date", "date", true)?)?
        .child(text_field(state, form, EmployeeField::EndDate, "End Date", "date", false)?)?
        .child(submit_button)?
        .build();

    let state_submit = state.clone();
    on_submit(&element, move || submit(&state_submit))?;
    Ok(element)
}
