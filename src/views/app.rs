// ============================================================================
// APP VIEW - Layout principal (sidebar + página de la ruta actual)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::{AppState, RequestTicket, Route};
use crate::views::dashboard::{load_dashboard, render_dashboard};
use crate::views::employee_detail::{load_employee_detail, render_employee_detail};
use crate::views::employee_form::{load_employee_form, render_employee_form};
use crate::views::employee_list::{load_employee_list, render_employee_list};
use crate::views::shared::{render_link, render_sidebar};
use crate::views::worklog_form::{load_worklog_form, render_worklog_form};
use crate::views::worklog_type_list::{load_worklog_types, render_worklog_type_list};

/// Lanzar las cargas iniciales de la página recién montada
pub fn mount_route(state: &AppState, route: &Route, ticket: RequestTicket) {
    match route {
        Route::Dashboard => load_dashboard(state, ticket),
        Route::Employees => load_employee_list(state, ticket),
        Route::EmployeeDetail(id) => load_employee_detail(state, *id, ticket),
        Route::EmployeeNew | Route::EmployeeEdit(_) => load_employee_form(state, ticket),
        Route::WorklogNew { .. } | Route::WorklogEdit(_) => load_worklog_form(state, ticket),
        Route::WorklogTypes => load_worklog_types(state, ticket),
        Route::NotFound(path) => log::warn!("⚠️ [ROUTER] Ruta desconocida: {}", path),
    }
}

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();

    let page = match &route {
        Route::Dashboard => render_dashboard(state)?,
        Route::Employees => render_employee_list(state)?,
        Route::EmployeeDetail(id) => render_employee_detail(state, *id)?,
        Route::EmployeeNew | Route::EmployeeEdit(_) => render_employee_form(state)?,
        Route::WorklogNew { .. } | Route::WorklogEdit(_) => render_worklog_form(state)?,
        Route::WorklogTypes => render_worklog_type_list(state)?,
        Route::NotFound(_) => render_not_found()?,
    };

    Ok(ElementBuilder::new("div")?
        .class("app-layout")
        .child(render_sidebar(&route)?)?
        .child(ElementBuilder::new("main")?.class("content").child(page)?.build())?
        .build())
}

fn render_not_found() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("not-found")
        .child(ElementBuilder::new("h1")?.text("Page not found").build())?
        .child(render_link(&Route::Dashboard.to_hash(), "btn btn-primary", "Back to dashboard")?)?
        .build())
}
