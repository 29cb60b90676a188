pub mod app;
pub mod dashboard;
pub mod employee_detail;
pub mod employee_form;
pub mod employee_list;
pub mod shared;
pub mod worklog_form;
pub mod worklog_type_list;

pub use app::{mount_route, render_app};
pub use employee_list::update_employee_table;
