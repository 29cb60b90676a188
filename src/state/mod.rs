// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod request_guard;
pub mod route;
pub mod dashboard_state;
pub mod employee_state;
pub mod worklog_state;
pub mod app_state;

pub use request_guard::*;
pub use route::*;
pub use dashboard_state::*;
pub use employee_state::*;
pub use worklog_state::*;
pub use app_state::*;
