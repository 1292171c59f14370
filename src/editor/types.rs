use thiserror::Error;

/// Longueur maximale d'un nom d'employé (en caractères).
pub const MAX_NAME_LEN: usize = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error("employee name is longer than {max} characters")]
    NameTooLong { max: usize },
    #[error("name already exists: {0}")]
    DuplicateName(String),
    #[error("timeslot label cannot be empty")]
    EmptyTimeslot,
    #[error("timeslot already exists: {0}")]
    DuplicateTimeslot(String),
    #[error("unknown employee index: {0}")]
    UnknownEmployee(usize),
    #[error("unknown employee: {0}")]
    UnknownEmployeeName(String),
    #[error("unknown timeslot index: {0}")]
    UnknownTimeslot(usize),
    #[error("invalid on-call position: {0}")]
    InvalidOnCallPosition(usize),
}
