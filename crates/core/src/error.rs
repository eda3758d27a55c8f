#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Date of birth is not in dd/mm/yyyy form: {0:?}")]
    InvalidDateFormat(String),

    #[error("Date of birth {day:02}/{month:02}/{year:04} is not a calendar date")]
    NotACalendarDate { day: u32, month: u32, year: i32 },
}
