use crate::model::{EmployeeId, ShiftId};
use std::fmt;
use thiserror::Error;

/// Côté d'un échange (tel que désigné par l'appelant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSide {
    A,
    B,
}

impl fmt::Display for SwapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapSide::A => f.write_str("A"),
            SwapSide::B => f.write_str("B"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: &'static str,
    },
    #[error("invalid start time {0}: must be between 0 and 23")]
    InvalidStartTime(u32),
    #[error("invalid end time {end}: must be after start ({start}) and at most 24")]
    InvalidEndTime { start: u32, end: u32 },
    #[error("shift overlaps existing shift {with} for employee {employee}")]
    Overlap { with: ShiftId, employee: EmployeeId },
    #[error("not a valid id: {0}")]
    InvalidId(String),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("unknown shift: {0}")]
    UnknownShift(String),
    #[error("swap: shift {side} ({id}) does not match any existing shift")]
    SwapUnknownShift { side: SwapSide, id: ShiftId },
    #[error("swap: both shifts belong to the same employee ({0})")]
    SameOwnerSwap(EmployeeId),
    #[error("swap: shift {side} overlaps shift {with} already owned by employee {employee}")]
    SwapConflict {
        side: SwapSide,
        with: ShiftId,
        employee: EmployeeId,
    },
    #[error("email already in use: {0}")]
    DuplicateEmail(String),
    #[error("store rejected write: {0}")]
    Persistence(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
