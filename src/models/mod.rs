pub mod employee;
pub mod grade;
pub mod summary;
pub mod worklog;
pub mod worklog_type;

pub use employee::{Employee, EmployeePayload, EmployeeStatus, GradeRef};
pub use grade::Grade;
pub use summary::{EffortSummary, SummaryRow, UNKNOWN_TYPE_LABEL};
pub use worklog::{IdRef, Worklog, WorklogEmployee, WorklogPayload};
pub use worklog_type::{WorklogType, WorklogTypePayload};

/// Entidades con id numérico asignado por el backend
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Employee {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Worklog {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for WorklogType {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Quitar un elemento de la lista local tras un DELETE exitoso (sin re-fetch)
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: i64) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_by_id_only_drops_matching_item() {
        let mut types = vec![
            WorklogType { id: 1, name: "Design".into(), description: None },
            WorklogType { id: 2, name: "Support".into(), description: None },
        ];
        assert!(remove_by_id(&mut types, 1));
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Support");
        assert!(!remove_by_id(&mut types, 42));
    }
}
