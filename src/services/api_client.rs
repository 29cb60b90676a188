// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Una función por endpoint. Sin reintentos, sin caché, sin cancelación y sin
// validación de la forma de la respuesta más allá de serde.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    EffortSummary, Employee, EmployeePayload, Grade, Worklog, WorklogPayload, WorklogType,
    WorklogTypePayload,
};
use crate::services::endpoints::{self, DashboardScope};
use crate::utils::dates::YearMonth;
use crate::models::summary::parse_total;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ------------------------------------------------------------------------
    // Employees
    // ------------------------------------------------------------------------

    pub async fn get_employees(&self) -> ApiResult<Vec<Employee>> {
        self.get_json(&endpoints::employees()).await
    }

    pub async fn get_employee(&self, id: i64) -> ApiResult<Employee> {
        self.get_json(&endpoints::employee(id)).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> ApiResult<Option<Employee>> {
        log::info!("👤 [API] Creando empleado: {} {}", payload.first_name, payload.last_name);
        self.post_json(&endpoints::employees(), payload).await
    }

    pub async fn update_employee(&self, id: i64, payload: &EmployeePayload) -> ApiResult<Option<Employee>> {
        log::info!("✏️ [API] Actualizando empleado {}", id);
        self.put_json(&endpoints::employee(id), payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> ApiResult<()> {
        log::info!("🗑️ [API] Eliminando empleado {}", id);
        self.delete(&endpoints::employee(id)).await
    }

    // ------------------------------------------------------------------------
    // Grades
    // ------------------------------------------------------------------------

    pub async fn get_grades(&self) -> ApiResult<Vec<Grade>> {
        self.get_json(&endpoints::grades()).await
    }

    // ------------------------------------------------------------------------
    // Worklogs
    // ------------------------------------------------------------------------

    pub async fn get_worklogs(&self) -> ApiResult<Vec<Worklog>> {
        self.get_json(&endpoints::worklogs()).await
    }

    pub async fn get_worklog(&self, id: i64) -> ApiResult<Worklog> {
        self.get_json(&endpoints::worklog(id)).await
    }

    pub async fn get_worklogs_by_employee(&self, employee_id: i64) -> ApiResult<Vec<Worklog>> {
        self.get_json(&endpoints::worklogs_by_employee(employee_id)).await
    }

    pub async fn get_worklogs_by_employee_and_month(
        &self,
        employee_id: i64,
        month: &YearMonth,
    ) -> ApiResult<Vec<Worklog>> {
        self.get_json(&endpoints::worklogs_by_employee_and_month(employee_id, month)).await
    }

    pub async fn create_worklog(&self, payload: &WorklogPayload) -> ApiResult<Option<Worklog>> {
        log::info!("📝 [API] Creando worklog para empleado {}", payload.employee.id);
        self.post_json(&endpoints::worklogs(), payload).await
    }

    pub async fn update_worklog(&self, id: i64, payload: &WorklogPayload) -> ApiResult<Option<Worklog>> {
        log::info!("✏️ [API] Actualizando worklog {}", id);
        self.put_json(&endpoints::worklog(id), payload).await
    }

    pub async fn delete_worklog(&self, id: i64) -> ApiResult<()> {
        log::info!("🗑️ [API] Eliminando worklog {}", id);
        self.delete(&endpoints::worklog(id)).await
    }

    // ------------------------------------------------------------------------
    // Worklog types
    // ------------------------------------------------------------------------

    pub async fn get_worklog_types(&self) -> ApiResult<Vec<WorklogType>> {
        self.get_json(&endpoints::worklog_types()).await
    }

    pub async fn create_worklog_type(&self, payload: &WorklogTypePayload) -> ApiResult<Option<WorklogType>> {
        log::info!("🏷️ [API] Creando tipo de worklog: {}", payload.name);
        self.post_json(&endpoints::worklog_types(), payload).await
    }

    pub async fn update_worklog_type(
        &self,
        id: i64,
        payload: &WorklogTypePayload,
    ) -> ApiResult<Option<WorklogType>> {
        log::info!("✏️ [API] Actualizando tipo de worklog {}", id);
        self.put_json(&endpoints::worklog_type(id), payload).await
    }

    pub async fn delete_worklog_type(&self, id: i64) -> ApiResult<()> {
        log::info!("🗑️ [API] Eliminando tipo de worklog {}", id);
        self.delete(&endpoints::worklog_type(id)).await
    }

    // ------------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------------

    pub async fn get_employee_effort_summary(
        &self,
        employee_id: i64,
        month: &YearMonth,
    ) -> ApiResult<Option<EffortSummary>> {
        self.get_json(&endpoints::effort_summary(&DashboardScope::Employee(employee_id), month)).await
    }

    pub async fn get_team_lead_effort_summary(
        &self,
        team_lead: &str,
        month: &YearMonth,
    ) -> ApiResult<Option<EffortSummary>> {
        let segment = encode_segment(team_lead);
        self.get_json(&endpoints::effort_summary(&DashboardScope::TeamLead(&segment), month)).await
    }

    pub async fn get_director_effort_summary(
        &self,
        director: &str,
        month: &YearMonth,
    ) -> ApiResult<Option<EffortSummary>> {
        let segment = encode_segment(director);
        self.get_json(&endpoints::effort_summary(&DashboardScope::Director(&segment), month)).await
    }

    pub async fn get_total_effort_by_employee(&self, employee_id: i64, month: &YearMonth) -> ApiResult<f64> {
        self.get_total(&endpoints::effort_total(&DashboardScope::Employee(employee_id), month)).await
    }

    pub async fn get_total_effort_by_team_lead(&self, team_lead: &str, month: &YearMonth) -> ApiResult<f64> {
        let segment = encode_segment(team_lead);
        self.get_total(&endpoints::effort_total(&DashboardScope::TeamLead(&segment), month)).await
    }

    pub async fn get_total_effort_by_director(&self, director: &str, month: &YearMonth) -> ApiResult<f64> {
        let segment = encode_segment(director);
        self.get_total(&endpoints::effort_total(&DashboardScope::Director(&segment), month)).await
    }

    async fn get_total(&self, path: &str) -> ApiResult<f64> {
        let value: Value = self.get_json(path).await?;
        Ok(parse_total(&value))
    }

    // ------------------------------------------------------------------------
    // Helpers HTTP
    // ------------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("🌐 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_success(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<Option<T>> {
        let url = self.url(path);
        log::debug!("🌐 [API] POST {}", url);

        let request = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        read_optional_body(request).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<Option<T>> {
        let url = self.url(path);
        log::debug!("🌐 [API] PUT {}", url);

        let request = Request::put(&url)
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        read_optional_body(request).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        log::debug!("🌐 [API] DELETE {}", url);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Las respuestas de escritura pueden venir vacías (201/204 sin body)
async fn read_optional_body<T: DeserializeOwned>(request: Request) -> ApiResult<Option<T>> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_success(response).await?;

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    parse_optional_body(&text)
}

fn parse_optional_body<T: DeserializeOwned>(text: &str) -> ApiResult<Option<T>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => response.status_text(),
    };
    log::warn!("⚠️ [API] HTTP {} en {}: {}", status, response.url(), message);
    Err(ApiError::Http { status, message })
}

fn encode_segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let api = ApiClient::with_base_url("http://localhost:8080/api/");
        assert_eq!(api.url(&endpoints::employees()), "http://localhost:8080/api/employees");
    }

    #[test]
    fn empty_write_bodies_are_accepted() {
        let parsed: Option<WorklogType> = parse_optional_body("  ").unwrap();
        assert!(parsed.is_none());

        let parsed: Option<WorklogType> = parse_optional_body(r#"{"id": 3, "name": "Design"}"#).unwrap();
        assert_eq!(parsed.map(|t| t.name).as_deref(), Some("Design"));

        let err = parse_optional_body::<WorklogType>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
