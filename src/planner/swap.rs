use super::{util, PlanError, Planner, SwapSide};
use crate::model::{Shift, ShiftId};
use crate::store::{EmployeeStore, ShiftStore};

/// Échange les propriétaires de deux quarts, en un seul passage.
///
/// Ordre du protocole : parsing des ids, résolution des deux quarts (erreur
/// distinguant le côté A/B), refus si même propriétaire, puis contrôle croisé
/// de non-chevauchement — B contre les autres quarts du propriétaire de A, et
/// A contre ceux du propriétaire de B, les deux quarts échangés étant exclus
/// du contrôle puisqu'ils changent de main. Les deux écritures ne partent
/// qu'une fois les deux directions validées.
pub(super) fn swap_shifts<E, S>(
    planner: &mut Planner<E, S>,
    raw_a: &str,
    raw_b: &str,
) -> Result<(), PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    let id_a = ShiftId::parse(raw_a).map_err(|_| PlanError::InvalidId(raw_a.to_owned()))?;
    let id_b = ShiftId::parse(raw_b).map_err(|_| PlanError::InvalidId(raw_b.to_owned()))?;

    let a = planner
        .shifts
        .get(&id_a)?
        .ok_or_else(|| PlanError::SwapUnknownShift {
            side: SwapSide::A,
            id: id_a.clone(),
        })?;
    let b = planner
        .shifts
        .get(&id_b)?
        .ok_or_else(|| PlanError::SwapUnknownShift {
            side: SwapSide::B,
            id: id_b.clone(),
        })?;

    if a.owner == b.owner {
        return Err(PlanError::SameOwnerSwap(a.owner));
    }

    let others_of = |shifts: Vec<Shift>| -> Vec<Shift> {
        shifts
            .into_iter()
            .filter(|s| s.id != id_a && s.id != id_b)
            .collect()
    };
    let of_owner_a = others_of(planner.shifts.list_by_owner(&a.owner)?);
    let of_owner_b = others_of(planner.shifts.list_by_owner(&b.owner)?);

    for s in &of_owner_a {
        if util::overlaps(&s.slot, &b.slot) {
            return Err(PlanError::SwapConflict {
                side: SwapSide::B,
                with: s.id.clone(),
                employee: a.owner.clone(),
            });
        }
    }
    for s in &of_owner_b {
        if util::overlaps(&s.slot, &a.slot) {
            return Err(PlanError::SwapConflict {
                side: SwapSide::A,
                with: s.id.clone(),
                employee: b.owner.clone(),
            });
        }
    }

    let swapped_a = Shift {
        owner: b.owner.clone(),
        ..a.clone()
    };
    let swapped_b = Shift {
        owner: a.owner,
        ..b
    };

    if !planner.shifts.update(&swapped_a)? {
        return Err(PlanError::Persistence("swap: shift A update"));
    }
    if !planner.shifts.update(&swapped_b)? {
        // Pas de rollback compensatoire au-delà des garanties du store.
        return Err(PlanError::Persistence("swap: shift B update"));
    }
    Ok(())
}
