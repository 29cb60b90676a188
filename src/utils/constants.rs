// Mensajes estáticos mostrados al usuario (los errores detallados solo van al log)

pub const MSG_FETCH_INITIAL_DATA_FAILED: &str = "Failed to fetch initial data";
pub const MSG_FETCH_EMPLOYEES_FAILED: &str = "Failed to fetch employees";
pub const MSG_FETCH_EMPLOYEE_DATA_FAILED: &str = "Failed to fetch employee data";
pub const MSG_EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const MSG_LOAD_FORM_FAILED: &str = "Failed to load form data";
pub const MSG_SAVE_EMPLOYEE_FAILED: &str = "Failed to save employee";
pub const MSG_EMPLOYEE_CREATED: &str = "Employee created successfully";
pub const MSG_EMPLOYEE_UPDATED: &str = "Employee updated successfully";
pub const MSG_EMPLOYEE_DELETED: &str = "Employee deleted successfully.";
pub const MSG_DELETE_EMPLOYEE_FAILED: &str =
    "An error occurred while deleting the employee. Please try again later.";
pub const MSG_SAVE_WORKLOG_FAILED: &str = "Failed to save worklog";
pub const MSG_WORKLOG_SAVED: &str = "Worklog saved successfully";
pub const MSG_DELETE_WORKLOG_FAILED: &str = "Failed to delete worklog";
pub const MSG_FETCH_WORKLOG_TYPES_FAILED: &str = "Failed to fetch worklog types";
pub const MSG_SUBMIT_WORKLOG_TYPE_FAILED: &str = "Failed to submit worklog type";
pub const MSG_DELETE_WORKLOG_TYPE_FAILED: &str = "Failed to delete worklog type";

pub const CONFIRM_DELETE_WORKLOG_TYPE: &str = "Are you sure you want to delete this worklog type?";
pub const CONFIRM_DELETE_WORKLOG: &str = "Are you sure you want to delete this worklog?";

pub const NO_DATA_AVAILABLE: &str = "No data available";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_AVAILABLE: &str = "N/A";
