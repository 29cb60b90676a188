pub mod components;
pub mod sidebar;

pub use components::*;
pub use sidebar::render_sidebar;
