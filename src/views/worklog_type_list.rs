// ============================================================================
// WORKLOG TYPE LIST VIEW - Tabla + modal de alta/edición
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{confirm, on_submit, ElementBuilder};
use crate::models::WorklogType;
use crate::state::{AppState, RequestTicket};
use crate::utils::constants::{
    CONFIRM_DELETE_WORKLOG_TYPE, MSG_DELETE_WORKLOG_TYPE_FAILED, MSG_FETCH_WORKLOG_TYPES_FAILED,
    MSG_SUBMIT_WORKLOG_TYPE_FAILED,
};
use crate::viewmodels::{WorklogTypeDraft, WorklogTypeViewModel};
use crate::views::shared::{
    render_alert, render_button, render_cell, render_empty_row, render_field, render_modal,
    render_optional_alert, render_page_header, render_spinner, render_table, render_text_input, AlertKind,
};

const HEADERS: [&str; 3] = ["ID", "Name", "Actions"];

pub fn load_worklog_types(state: &AppState, ticket: RequestTicket) {
    let state = state.clone();
    spawn_local(async move {
        let result = WorklogTypeViewModel::new().load().await;
        if !ticket.is_current() {
            return;
        }
        {
            let mut list = state.worklog_types.borrow_mut();
            list.loading = false;
            match result {
                Ok(types) => list.types = types,
                Err(e) => {
                    log::error!("❌ [WORKLOG-TYPES] Error cargando tipos: {}", e);
                    list.error = Some(MSG_FETCH_WORKLOG_TYPES_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

fn submit(state: &AppState) {
    let payload = {
        let mut list = state.worklog_types.borrow_mut();
        if list.saving {
            return;
        }
        let payload = list.draft.as_ref().map(WorklogTypeDraft::to_payload);
        match payload {
            Some(Ok(payload)) => {
                list.saving = true;
                list.modal_error = None;
                payload
            }
            Some(Err(validation)) => {
                list.modal_error = Some(validation.to_string());
                drop(list);
                state.notify_subscribers();
                return;
            }
            None => return,
        }
    };
    state.notify_subscribers();

    let page = state.page_guard.current();
    let state = state.clone();
    spawn_local(async move {
        // Crear/actualizar y luego recargar la lista completa
        let result = WorklogTypeViewModel::new().submit(&payload).await;
        if !page.is_current() {
            return;
        }
        {
            let mut list = state.worklog_types.borrow_mut();
            match result {
                Ok(types) => {
                    log::info!("✅ [WORKLOG-TYPES] Tipo '{}' guardado", payload.name);
                    list.types = types;
                    list.error = None;
                    list.close_modal();
                }
                Err(e) => {
                    log::error!("❌ [WORKLOG-TYPES] Error guardando tipo: {}", e);
                    list.saving = false;
                    list.modal_error = Some(MSG_SUBMIT_WORKLOG_TYPE_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

fn delete(state: &AppState, id: i64) {
    if !confirm(CONFIRM_DELETE_WORKLOG_TYPE) {
        return;
    }
    let page = state.page_guard.current();
    let state = state.clone();
    spawn_local(async move {
        let result = WorklogTypeViewModel::new().delete(id).await;
        if !page.is_current() {
            return;
        }
        {
            let mut list = state.worklog_types.borrow_mut();
            match result {
                Ok(()) => {
                    log::info!("🗑️ [WORKLOG-TYPES] Tipo {} eliminado", id);
                    list.remove(id);
                }
                Err(e) => {
                    log::error!("❌ [WORKLOG-TYPES] Error eliminando tipo {}: {}", id, e);
                    list.error = Some(MSG_DELETE_WORKLOG_TYPE_FAILED.to_string());
                }
            }
        }
        state.notify_subscribers();
    });
}

fn open_modal(state: &AppState, draft: WorklogTypeDraft) {
    state.worklog_types.borrow_mut().open_modal(draft);
    state.notify_subscribers();
}

pub fn render_worklog_type_list(state: &AppState) -> Result<Element, JsValue> {
    let list = state.worklog_types.borrow();

    let state_add = state.clone();
    let add = render_button("btn btn-primary", "Add Worklog Type", move || {
        open_modal(&state_add, WorklogTypeDraft::default());
    })?;

    let container = ElementBuilder::new("div")?
        .class("worklog-types")
        .child(render_page_header("Worklog Types", vec![add])?)?
        .child_opt(render_optional_alert(AlertKind::Error, list.error.as_deref())?)?;

    if list.loading {
        return Ok(container.child(render_spinner("Loading...")?)?.build());
    }

    let rows = if list.types.is_empty() {
        vec![render_empty_row(HEADERS.len(), "No worklog types found")?]
    } else {
        list.types
            .iter()
            .map(|t| render_row(state, t))
            .collect::<Result<Vec<_>, _>>()?
    };

    let modal = list
        .draft
        .as_ref()
        .map(|draft| render_type_modal(state, draft, list.saving, list.modal_error.as_deref()))
        .transpose()?;

    Ok(container
        .child(render_table(&HEADERS, rows, None)?)?
        .child_opt(modal)?
        .build())
}

fn render_row(state: &AppState, worklog_type: &WorklogType) -> Result<Element, JsValue> {
    let state_edit = state.clone();
    let draft = WorklogTypeDraft::from_type(worklog_type);
    let edit = render_button("btn btn-sm btn-outline", "Edit", move || {
        open_modal(&state_edit, draft.clone());
    })?;

    let state_delete = state.clone();
    let id = worklog_type.id;
    let delete_button = render_button("btn btn-sm btn-danger", "Delete", move || delete(&state_delete, id))?;

    Ok(ElementBuilder::new("tr")?
        .child(render_cell(&id.to_string())?)?
        .child(render_cell(&worklog_type.name)?)?
        .child(ElementBuilder::new("td")?.class("actions").child(edit)?.child(delete_button)?.build())?
        .build())
}

fn render_type_modal(
    state: &AppState,
    draft: &WorklogTypeDraft,
    saving: bool,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let state_name = state.clone();
    let name_input = render_text_input("worklogTypeName", "text", &draft.name, move |value| {
        if let Some(draft) = state_name.worklog_types.borrow_mut().draft.as_mut() {
            draft.name = value;
        }
    })?;

    let form = ElementBuilder::new("form")?
        .attr("novalidate", "")?
        .child_opt(error.map(|e| render_alert(AlertKind::Error, e)).transpose()?)?
        .child(render_field("Name", name_input, true)?)?
        .build();
    let state_submit = state.clone();
    on_submit(&form, move || submit(&state_submit))?;

    let state_cancel = state.clone();
    let cancel = render_button("btn btn-secondary", "Cancel", move || {
        state_cancel.worklog_types.borrow_mut().close_modal();
        state_cancel.notify_subscribers();
    })?;

    let state_save = state.clone();
    let save = render_button(
        "btn btn-primary",
        if saving { "Saving..." } else { "Save" },
        move || submit(&state_save),
    )?;
    if saving {
        save.set_attribute("disabled", "")?;
    }

    render_modal(draft.modal_title(), vec![form], vec![cancel, save])
}
