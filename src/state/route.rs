// ============================================================================
// ROUTE - Rutas hash (#/...) de la aplicación
// ============================================================================

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Employees,
    EmployeeNew,
    EmployeeDetail(i64),
    EmployeeEdit(i64),
    WorklogNew { employee_id: Option<i64> },
    WorklogEdit(i64),
    WorklogTypes,
    NotFound(String),
}

/// Sección del menú lateral activa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Employees,
    WorklogTypes,
}

impl Route {
    /// Parsear `location.hash` ("#/employees/3", "", "#/worklogs/new?employeeId=2")
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#');
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["dashboard"] => Route::Dashboard,
            ["employees"] => Route::Employees,
            ["employees", "new"] => Route::EmployeeNew,
            ["employees", "edit", id] => parse_id(id).map(Route::EmployeeEdit).unwrap_or_else(|| not_found(raw)),
            ["employees", id] => parse_id(id).map(Route::EmployeeDetail).unwrap_or_else(|| not_found(raw)),
            ["worklogs", "new"] => Route::WorklogNew {
                employee_id: query.and_then(|q| query_param(q, "employeeId")).and_then(parse_id),
            },
            ["worklogs", "edit", id] => parse_id(id).map(Route::WorklogEdit).unwrap_or_else(|| not_found(raw)),
            ["worklog-types"] => Route::WorklogTypes,
            _ => not_found(raw),
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Dashboard => "#/".to_string(),
            Route::Employees => "#/employees".to_string(),
            Route::EmployeeNew => "#/employees/new".to_string(),
            Route::EmployeeDetail(id) => format!("#/employees/{}", id),
            Route::EmployeeEdit(id) => format!("#/employees/edit/{}", id),
            Route::WorklogNew { employee_id: Some(id) } => format!("#/worklogs/new?employeeId={}", id),
            Route::WorklogNew { employee_id: None } => "#/worklogs/new".to_string(),
            Route::WorklogEdit(id) => format!("#/worklogs/edit/{}", id),
            Route::WorklogTypes => "#/worklog-types".to_string(),
            Route::NotFound(path) => format!("#{}", path),
        }
    }

    pub fn nav_section(&self) -> Option<NavSection> {
        match self {
            Route::Dashboard => Some(NavSection::Dashboard),
            Route::Employees
            | Route::EmployeeNew
            | Route::EmployeeDetail(_)
            | Route::EmployeeEdit(_)
            | Route::WorklogNew { .. }
            | Route::WorklogEdit(_) => Some(NavSection::Employees),
            Route::WorklogTypes => Some(NavSection::WorklogTypes),
            Route::NotFound(_) => None,
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn not_found(raw: &str) -> Route {
    Route::NotFound(raw.to_string())
}

/// Ruta actual según `window.location.hash`
pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

/// Navegar cambiando el hash; el listener de `hashchange` hace el resto
pub fn navigate(route: &Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    log::info!("🧭 [ROUTER] Navegando a {}", route.to_hash());
    window.location().set_hash(&route.to_hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/employees/"), Route::Employees);
        assert_eq!(Route::from_hash("#/employees/new"), Route::EmployeeNew);
        assert_eq!(Route::from_hash("#/employees/12"), Route::EmployeeDetail(12));
        assert_eq!(Route::from_hash("#/employees/edit/12"), Route::EmployeeEdit(12));
        assert_eq!(Route::from_hash("#/worklogs/edit/5"), Route::WorklogEdit(5));
        assert_eq!(Route::from_hash("#/worklog-types"), Route::WorklogTypes);
    }

    #[test]
    fn worklog_new_reads_preselected_employee() {
        assert_eq!(
            Route::from_hash("#/worklogs/new?employeeId=7"),
            Route::WorklogNew { employee_id: Some(7) }
        );
        assert_eq!(
            Route::from_hash("#/worklogs/new?foo=1&employeeId=x"),
            Route::WorklogNew { employee_id: None }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_hash("#/employees/abc"), Route::NotFound("/employees/abc".into()));
        assert_eq!(Route::from_hash("#/nope"), Route::NotFound("/nope".into()));
        assert_eq!(Route::from_hash("#/nope").nav_section(), None);
    }

    #[test]
    fn routes_round_trip_through_hash() {
        let routes = [
            Route::Dashboard,
            Route::Employees,
            Route::EmployeeNew,
            Route::EmployeeDetail(3),
            Route::EmployeeEdit(3),
            Route::WorklogNew { employee_id: None },
            Route::WorklogNew { employee_id: Some(9) },
            Route::WorklogEdit(4),
            Route::WorklogTypes,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
