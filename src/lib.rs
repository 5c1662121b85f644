#![forbid(unsafe_code)]
//! Horaires — bibliothèque de planification de quarts de travail locale (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Validation date/heures, non-chevauchement par employé.
//! - Échanges de quarts sûrs (swap à deux employés).
//! - Dates calendaires + heures entières, pas de fuseaux.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod planner;
#[cfg(feature = "serde")]
pub mod storage;
pub mod store;

pub use model::{Employee, EmployeeId, Roster, Shift, ShiftId, TimeSlot};
pub use planner::{overlaps, validate_slot, PlanError, Planner, SwapSide};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
pub use store::{
    memory_stores, EmployeeStore, MemoryEmployeeStore, MemoryShiftStore, ShiftStore,
};
