use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    /// Seul point d'entrée pour un id venant d'une saisie non fiable.
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Self, uuid::Error> {
        let parsed = Uuid::parse_str(s.as_ref())?;
        Ok(Self(parsed.to_string()))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftId(String);

impl ShiftId {
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Self, uuid::Error> {
        let parsed = Uuid::parse_str(s.as_ref())?;
        Ok(Self(parsed.to_string()))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employé (membre de l'équipe)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// Unique sur l'ensemble des employés (imposé par la couche planner).
    pub email: String,
}

impl Employee {
    pub fn new<F, L, E>(first_name: F, last_name: L, email: E) -> Self
    where
        F: Into<String>,
        L: Into<String>,
        E: Into<String>,
    {
        Self {
            id: EmployeeId::random(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// Créneau d'une journée : date calendaire + heures entières.
///
/// Forme structurelle minimale partagée entre un shift persisté et un
/// candidat pas encore persisté. L'intervalle `[start, end)` est semi-ouvert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSlot {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Heure de début, dans `[0, 23]`.
    pub start: u32,
    /// Heure de fin, dans `(start, 24]`.
    pub end: u32,
}

impl TimeSlot {
    pub fn new(year: i32, month: u32, day: u32, start: u32, end: u32) -> Self {
        Self {
            year,
            month,
            day,
            start,
            end,
        }
    }

    pub fn same_date(&self, other: &TimeSlot) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }

    /// Durée en heures.
    pub fn duration_hours(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// Quart de travail : une journée, un intervalle, un propriétaire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shift {
    pub id: ShiftId,
    /// Clé étrangère souple vers `Employee` (relation n-1, non exclusive).
    pub owner: EmployeeId,
    pub slot: TimeSlot,
}

impl Shift {
    pub fn new(owner: EmployeeId, slot: TimeSlot) -> Self {
        Self {
            id: ShiftId::random(),
            owner,
            slot,
        }
    }
}

/// Roster complet (employés + quarts), forme sérialisable du fichier plan.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub shifts: Vec<Shift>,
}

impl Roster {
    pub fn find_employee_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
    pub fn find_employee_by_email<'a>(&'a self, email: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.email == email)
    }
    pub fn find_shift<'a>(&'a self, id: &ShiftId) -> Option<&'a Shift> {
        self.shifts.iter().find(|s| &s.id == id)
    }
}
