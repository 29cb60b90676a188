// ============================================================================
// WORKLOG ADMIN - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI + orquestación async
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::{current_route, UpdateType};

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Worklog Admin - Rust Puro + MVVM (API: {})", CONFIG.api_base_url);

    let route = current_route();
    let mut app = App::new(route.clone())?;
    app.navigate(route)?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listener global de navegación: se registra UNA sola vez aquí
    crate::dom::on_window_event("hashchange", |_event| {
        let route = current_route();
        APP.with(|app_cell| {
            if let Some(app) = app_cell.borrow_mut().as_mut() {
                if let Err(e) = app.navigate(route) {
                    log::error!("❌ [ROUTER] Error montando ruta: {:?}", e);
                }
            }
        });
    })?;

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| match update_type {
        UpdateType::Incremental(kind) => {
            // Primero intentamos actualización incremental
            let needs_full_render = match app_cell.borrow().as_ref() {
                Some(app) => match app.update_incremental(kind.clone()) {
                    Ok(()) => false,
                    Err(e) => {
                        log::debug!("🔄 [UPDATE] {:?} incremental falló ({:?}), re-render completo", kind, e);
                        true
                    }
                },
                None => {
                    log::warn!("⚠️ [UPDATE] App no está inicializada");
                    false
                }
            };

            if needs_full_render {
                if let Some(app) = app_cell.borrow_mut().as_mut() {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
            }
        }
        UpdateType::FullRender => match app_cell.borrow_mut().as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
