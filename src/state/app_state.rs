// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{
    DashboardState, DimensionGuards, EmployeeDetailState, EmployeeFormState, EmployeeListState,
    RequestGuard, RequestTicket, Route, WorklogFormState, WorklogTypeListState,
};

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo de la página actual
    FullRender,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Filas de la tabla de empleados + contador (al escribir en el buscador)
    EmployeeTable,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub route: Rc<RefCell<Route>>,

    // Estado por página (se reinicia al entrar en la ruta)
    pub dashboard: Rc<RefCell<DashboardState>>,
    pub employee_list: Rc<RefCell<EmployeeListState>>,
    pub employee_detail: Rc<RefCell<EmployeeDetailState>>,
    pub employee_form: Rc<RefCell<EmployeeFormState>>,
    pub worklog_form: Rc<RefCell<WorklogFormState>>,
    pub worklog_types: Rc<RefCell<WorklogTypeListState>>,

    // Secuencias de peticiones: la de página cambia con cada navegación
    pub page_guard: RequestGuard,
    pub dimension_guards: DimensionGuards,
    /// Recargas dentro de una misma página (filtro por mes de la ficha)
    pub reload_guard: RequestGuard,

    // Reactivity: Callbacks para notificar cambios (usamos Rc para poder compartir)
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self {
            route: Rc::new(RefCell::new(route)),
            dashboard: Rc::new(RefCell::new(DashboardState::default())),
            employee_list: Rc::new(RefCell::new(EmployeeListState::default())),
            employee_detail: Rc::new(RefCell::new(EmployeeDetailState::default())),
            employee_form: Rc::new(RefCell::new(EmployeeFormState::default())),
            worklog_form: Rc::new(RefCell::new(WorklogFormState::default())),
            worklog_types: Rc::new(RefCell::new(WorklogTypeListState::default())),
            page_guard: RequestGuard::new(),
            dimension_guards: DimensionGuards::default(),
            reload_guard: RequestGuard::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Entrar en una ruta: estado de página limpio y peticiones anteriores invalidadas.
    /// El ticket devuelto protege las cargas iniciales de la página.
    pub fn enter_route(&self, route: Route) -> RequestTicket {
        match &route {
            Route::Dashboard => *self.dashboard.borrow_mut() = DashboardState::default(),
            Route::Employees => *self.employee_list.borrow_mut() = EmployeeListState::default(),
            Route::EmployeeDetail(_) => *self.employee_detail.borrow_mut() = EmployeeDetailState::default(),
            Route::EmployeeNew => *self.employee_form.borrow_mut() = EmployeeFormState::new(None),
            Route::EmployeeEdit(id) => *self.employee_form.borrow_mut() = EmployeeFormState::new(Some(*id)),
            Route::WorklogNew { employee_id } => {
                *self.worklog_form.borrow_mut() = WorklogFormState::new(None, *employee_id)
            }
            Route::WorklogEdit(id) => *self.worklog_form.borrow_mut() = WorklogFormState::new(Some(*id), None),
            Route::WorklogTypes => *self.worklog_types.borrow_mut() = WorklogTypeListState::default(),
            Route::NotFound(_) => {}
        }

        *self.route.borrow_mut() = route;
        self.dimension_guards.invalidate_all();
        self.reload_guard.invalidate();
        self.page_guard.begin()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers (re-render completo)
    pub fn notify_subscribers(&self) {
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        match update_type {
            UpdateType::Incremental(kind) => crate::rerender_app_with_type(UpdateType::Incremental(kind)),
            UpdateType::FullRender => {
                // Clonar para no mantener el borrow mientras corren los callbacks
                let callbacks: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
                for callback in callbacks {
                    callback();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn entering_a_route_resets_its_page_state() {
        let state = AppState::new(Route::Dashboard);
        state.employee_list.borrow_mut().search = "ada".into();
        state.employee_list.borrow_mut().loading = false;

        state.enter_route(Route::Employees);

        let list = state.employee_list.borrow();
        assert!(list.search.is_empty());
        assert!(list.loading);
        assert_eq!(state.current_route(), Route::Employees);
    }

    #[test]
    fn navigation_invalidates_in_flight_page_loads() {
        let state = AppState::new(Route::Dashboard);
        let first = state.enter_route(Route::EmployeeDetail(1));
        let second = state.enter_route(Route::EmployeeDetail(2));
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn worklog_route_carries_preselected_employee() {
        let state = AppState::new(Route::Dashboard);
        state.enter_route(Route::WorklogNew { employee_id: Some(5) });
        let form = state.worklog_form.borrow();
        assert_eq!(form.preselected_employee, Some(5));
        assert_eq!(form.form.employee_id, "5");
    }

    #[test]
    fn full_render_notifies_subscribers() {
        let state = AppState::new(Route::Dashboard);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));

        state.notify_subscribers();
        state.notify_subscribers();
        assert_eq!(calls.get(), 2);
    }
}
