// ============================================================================
// FECHAS - Mes (YYYY-MM) y fechas de calendario
// ============================================================================
// El input <input type="month"> usa YYYY-MM, el backend espera MM-yyyy en los
// endpoints del dashboard y devuelve monthDate como "YYYY-MM", "YYYY-MM-DD" o
// [año, mes] según cómo serialice YearMonth.
// ============================================================================

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use serde_json::Value;

use crate::error::ValidationError;

/// Mes de calendario (sin día)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (1..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Mes actual (UTC, igual que toISOString en el navegador)
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self { year: today.year(), month: today.month() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parsear valor de <input type="month"> ("2024-03")
    pub fn parse_input(input: &str) -> Result<Self, ValidationError> {
        let (year, month) = input.trim().split_once('-').ok_or(ValidationError::InvalidMonth)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(ValidationError::InvalidMonth);
        }
        let year: i32 = year.parse().map_err(|_| ValidationError::InvalidMonth)?;
        let month: u32 = month.parse().map_err(|_| ValidationError::InvalidMonth)?;
        Self::new(year, month).ok_or(ValidationError::InvalidMonth)
    }

    /// Interpretar monthDate tal como llega del backend
    pub fn from_backend(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => s.get(..7).and_then(|prefix| Self::parse_input(prefix).ok()),
            Value::Array(parts) => {
                let year = parts.first()?.as_i64()?;
                let month = parts.get(1)?.as_u64()?;
                Self::new(i32::try_from(year).ok()?, u32::try_from(month).ok()?)
            }
            _ => None,
        }
    }

    /// Formato para <input type="month"> y para el payload de worklog
    pub fn to_input_value(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Formato MM-yyyy de los endpoints del dashboard
    pub fn to_backend_param(&self) -> String {
        format!("{:02}-{:04}", self.month, self.year)
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|date| date.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_input_value())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_input_value())
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_input(s)
    }
}

/// Conversión directa YYYY-MM → MM-yyyy
pub fn to_backend_month(input: &str) -> Result<String, ValidationError> {
    YearMonth::parse_input(input).map(|month| month.to_backend_param())
}

/// Parte de fecha (YYYY-MM-DD) de una fecha o datetime ISO
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Fecha de calendario tal como llega del backend: texto ISO o [año, mes, día]
pub fn date_from_backend(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(parts) => {
            let year = i32::try_from(parts.first()?.as_i64()?).ok()?;
            let month = u32::try_from(parts.get(1)?.as_u64()?).ok()?;
            let day = u32::try_from(parts.get(2)?.as_u64()?).ok()?;
            NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%Y-%m-%d").to_string())
        }
        _ => None,
    }
}

/// Valor para <input type="date">; cadena vacía si no es una fecha válida
pub fn to_date_input(raw: Option<&str>) -> String {
    raw.and_then(parse_iso_date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Fecha para tablas (dd.MM.yyyy)
pub fn format_display_date(raw: Option<&str>) -> Option<String> {
    raw.and_then(parse_iso_date)
        .map(|date| date.format("%d.%m.%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_month_converts_to_backend_param() {
        assert_eq!(to_backend_month("2024-03").unwrap(), "03-2024");
        assert_eq!(to_backend_month("1999-12").unwrap(), "12-1999");
    }

    #[test]
    fn malformed_months_are_rejected() {
        for bad in ["", "2024", "2024-13", "2024-00", "24-03", "2024-3", "03-2024", "abcd-ef"] {
            assert_eq!(YearMonth::parse_input(bad), Err(ValidationError::InvalidMonth), "{bad}");
        }
    }

    #[test]
    fn backend_month_shapes_are_understood() {
        let expected = YearMonth::new(2024, 3);
        assert_eq!(YearMonth::from_backend(&json!("2024-03")), expected);
        assert_eq!(YearMonth::from_backend(&json!("2024-03-01")), expected);
        assert_eq!(YearMonth::from_backend(&json!([2024, 3])), expected);
        assert_eq!(YearMonth::from_backend(&json!(null)), None);
        assert_eq!(YearMonth::from_backend(&json!("soon")), None);
    }

    #[test]
    fn month_label_is_long_form() {
        assert_eq!(YearMonth::new(2024, 3).unwrap().label(), "March 2024");
    }

    #[test]
    fn dates_are_formatted_for_inputs_and_tables() {
        assert_eq!(to_date_input(Some("2023-05-17T00:00:00Z")), "2023-05-17");
        assert_eq!(to_date_input(Some("garbage")), "");
        assert_eq!(to_date_input(None), "");
        assert_eq!(format_display_date(Some("2023-05-17")).as_deref(), Some("17.05.2023"));
        assert_eq!(format_display_date(Some("")), None);
    }

    #[test]
    fn backend_dates_accept_text_or_array() {
        assert_eq!(date_from_backend(&json!([2020, 1, 15])).as_deref(), Some("2020-01-15"));
        assert_eq!(date_from_backend(&json!("2020-01-15T08:00:00")).as_deref(), Some("2020-01-15T08:00:00"));
        assert_eq!(date_from_backend(&json!([2020, 2, 30])), None);
        assert_eq!(date_from_backend(&json!(null)), None);
        assert_eq!(to_date_input(date_from_backend(&json!([2021, 12, 1])).as_deref()), "2021-12-01");
    }
}
