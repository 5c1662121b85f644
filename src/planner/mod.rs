mod employees;
mod lifecycle;
mod swap;
mod types;
mod util;
mod validate;

pub use types::{PlanError, SwapSide};
pub use util::overlaps;
pub use validate::validate_slot;

use crate::model::{Employee, EmployeeId, Roster, Shift, ShiftId, TimeSlot};
use crate::store::{memory_stores, EmployeeStore, MemoryEmployeeStore, MemoryShiftStore, ShiftStore};
use chrono::{NaiveDate, Utc};

/// Planner : orchestre les règles métier au-dessus des deux stores.
///
/// Toutes les mutations prennent `&mut self` : lecture-validation-écriture
/// sont sérialisées par instance, aucune autre forme de verrouillage n'est
/// revendiquée.
#[derive(Debug)]
pub struct Planner<E, S> {
    pub(crate) employees: E,
    pub(crate) shifts: S,
}

impl<E, S> Planner<E, S>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    pub fn new(employees: E, shifts: S) -> Self {
        Self { employees, shifts }
    }

    pub fn list_employees(&self) -> Result<Vec<Employee>, PlanError> {
        Ok(self.employees.list_all()?)
    }

    pub fn list_shifts(&self) -> Result<Vec<Shift>, PlanError> {
        Ok(self.shifts.list_all()?)
    }

    pub fn shifts_of(&self, owner: &EmployeeId) -> Result<Vec<Shift>, PlanError> {
        Ok(self.shifts.list_by_owner(owner)?)
    }

    // --- employés ---

    pub fn create_employee(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Employee, PlanError> {
        employees::create_employee(self, first_name, last_name, email)
    }

    pub fn edit_employee(
        &mut self,
        id: &EmployeeId,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Employee, PlanError> {
        employees::edit_employee(self, id, first_name, last_name, email)
    }

    pub fn delete_employee(&mut self, id: &EmployeeId) -> Result<bool, PlanError> {
        employees::delete_employee(self, id)
    }

    // --- quarts ---

    /// Crée un quart pour `owner` après validation complète (date, heures,
    /// non-chevauchement contre ses quarts existants).
    pub fn create_shift(&mut self, owner: &EmployeeId, slot: TimeSlot) -> Result<Shift, PlanError> {
        lifecycle::create_shift(self, owner, slot, today())
    }

    /// Réécrit un quart existant, nouveau propriétaire possible ; le quart
    /// édité est exclu du contrôle de chevauchement.
    pub fn edit_shift(
        &mut self,
        shift_id: &ShiftId,
        owner_raw: &str,
        slot: TimeSlot,
    ) -> Result<Shift, PlanError> {
        lifecycle::edit_shift(self, shift_id, owner_raw, slot, today())
    }

    /// `false` si le quart n'existait pas (signal, pas une erreur).
    pub fn delete_shift(&mut self, shift_id: &ShiftId) -> Result<bool, PlanError> {
        lifecycle::delete_shift(self, shift_id)
    }

    pub fn delete_all_shifts(&mut self) -> Result<bool, PlanError> {
        lifecycle::delete_all_shifts(self)
    }

    /// Tout-ou-rien : chaque id du lot doit parser et référencer un employé
    /// existant, sinon aucune suppression n'a lieu.
    pub fn delete_shifts_for_employees(&mut self, raw_ids: &[String]) -> Result<bool, PlanError> {
        lifecycle::delete_shifts_for_employees(self, raw_ids)
    }

    /// Échange les propriétaires de deux quarts appartenant à deux employés
    /// différents ; `swap(a, b)` suivi de `swap(a, b)` restaure l'état initial.
    pub fn swap_shifts(&mut self, raw_a: &str, raw_b: &str) -> Result<(), PlanError> {
        swap::swap_shifts(self, raw_a, raw_b)
    }
}

impl Planner<MemoryEmployeeStore, MemoryShiftStore> {
    /// Planner vide adossé aux stores mémoire.
    pub fn in_memory() -> Self {
        Self::from_roster(Roster::default())
    }

    /// Planner en mémoire à partir d'un roster chargé (pont CLI/fichier).
    pub fn from_roster(roster: Roster) -> Self {
        let (employees, shifts) = memory_stores(roster);
        Self::new(employees, shifts)
    }

    pub fn to_roster(&self) -> Roster {
        Roster {
            employees: self.employees.list_all().unwrap_or_default(),
            shifts: self.shifts.list_all().unwrap_or_default(),
        }
    }
}

impl Default for Planner<MemoryEmployeeStore, MemoryShiftStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
