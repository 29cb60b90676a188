// ============================================================================
// APP - Aplicación principal: estado global, navegación y render
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, IncrementalUpdate, Route};
use crate::views::{mount_route, render_app, update_employee_table};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en #app
    pub fn new(initial_route: Route) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(initial_route);

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Timeout 0 para batchear múltiples updates
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Entrar en una ruta: reiniciar estado de página, lanzar cargas y pintar
    pub fn navigate(&mut self, route: Route) -> Result<(), JsValue> {
        log::info!("🧭 [APP] Montando {}", route.to_hash());
        let ticket = self.state.enter_route(route.clone());
        mount_route(&self.state, &route, ticket);
        self.render()
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render()");
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::EmployeeTable => update_employee_table(&self.state),
        }
    }
}
