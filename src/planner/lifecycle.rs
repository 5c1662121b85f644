use super::{validate, PlanError, Planner};
use crate::model::{EmployeeId, Shift, ShiftId, TimeSlot};
use crate::store::{EmployeeStore, ShiftStore};
use chrono::NaiveDate;

pub(super) fn create_shift<E, S>(
    planner: &mut Planner<E, S>,
    owner: &EmployeeId,
    slot: TimeSlot,
    today: NaiveDate,
) -> Result<Shift, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    validate::validate_slot(&slot, today)?;
    let existing = planner.shifts.list_by_owner(owner)?;
    validate::ensure_no_overlap(&slot, &existing, None)?;

    let shift = Shift::new(owner.clone(), slot);
    planner.shifts.insert(shift.clone())?;
    Ok(shift)
}

/// Réécrit un quart en entier (même identité), propriétaire compris.
///
/// Snapshot → valeur reconstruite → un seul `update`, jamais de mutation
/// champ par champ d'une entité chargée.
pub(super) fn edit_shift<E, S>(
    planner: &mut Planner<E, S>,
    shift_id: &ShiftId,
    owner_raw: &str,
    slot: TimeSlot,
    today: NaiveDate,
) -> Result<Shift, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    let current = planner
        .shifts
        .get(shift_id)?
        .ok_or_else(|| PlanError::UnknownShift(shift_id.to_string()))?;

    let owner =
        EmployeeId::parse(owner_raw).map_err(|_| PlanError::InvalidId(owner_raw.to_owned()))?;
    if !planner.employees.exists(&owner)? {
        return Err(PlanError::UnknownEmployee(owner_raw.to_owned()));
    }

    validate::validate_slot(&slot, today)?;
    let existing = planner.shifts.list_by_owner(&owner)?;
    validate::ensure_no_overlap(&slot, &existing, Some(shift_id))?;

    let updated = Shift {
        id: current.id,
        owner,
        slot,
    };
    if !planner.shifts.update(&updated)? {
        return Err(PlanError::Persistence("shift update"));
    }
    Ok(updated)
}

pub(super) fn delete_shift<E, S>(
    planner: &mut Planner<E, S>,
    shift_id: &ShiftId,
) -> Result<bool, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    Ok(planner.shifts.delete(shift_id)?)
}

pub(super) fn delete_all_shifts<E, S>(planner: &mut Planner<E, S>) -> Result<bool, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    Ok(planner.shifts.delete_all()?)
}

/// Suppression en lot : tout le batch est validé avant la moindre mutation.
/// Un seul id malformé ou inconnu rejette l'ensemble, zéro quart supprimé.
pub(super) fn delete_shifts_for_employees<E, S>(
    planner: &mut Planner<E, S>,
    raw_ids: &[String],
) -> Result<bool, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    let mut owners = Vec::with_capacity(raw_ids.len());
    for raw in raw_ids {
        let id = EmployeeId::parse(raw).map_err(|_| PlanError::InvalidId(raw.clone()))?;
        if !planner.employees.exists(&id)? {
            return Err(PlanError::UnknownEmployee(raw.clone()));
        }
        owners.push(id);
    }
    Ok(planner.shifts.delete_by_owners(&owners)?)
}
