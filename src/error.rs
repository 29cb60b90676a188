// ============================================================================
// ERRORES - API y validación de formularios
// ============================================================================
// Las vistas nunca muestran estos mensajes tal cual para errores de API:
// se loguean y se sustituyen por un mensaje estático ("Failed to ...").
// Los ValidationError sí se muestran al usuario.
// ============================================================================

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please select a grade")]
    MissingGrade,

    #[error("Please select an employee")]
    MissingEmployee,

    #[error("Please select a worklog type")]
    MissingWorklogType,

    #[error("Invalid month")]
    InvalidMonth,

    #[error("Effort must be a non-negative multiple of 0.5")]
    InvalidEffort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = ApiError::Http { status: 404, message: "Not Found".into() };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::Required("First name").to_string(), "First name is required");
        assert_eq!(ValidationError::MissingGrade.to_string(), "Please select a grade");
    }
}
