use super::{util, PlanError};
use crate::model::{Shift, ShiftId, TimeSlot};
use chrono::NaiveDate;

/// Valide la date et les bornes horaires d'un candidat, dans l'ordre, avec
/// arrêt à la première erreur.
///
/// Les bornes 1-31 / 1-12 sont vérifiées d'abord (chacune avec son erreur
/// propre), puis la date est composée : un jour calendaire inexistant
/// (30 février) est rejeté, et une date strictement passée aussi — le jour
/// même reste accepté.
pub fn validate_slot(slot: &TimeSlot, today: NaiveDate) -> Result<(), PlanError> {
    let invalid_date = |reason: &'static str| PlanError::InvalidDate {
        year: slot.year,
        month: slot.month,
        day: slot.day,
        reason,
    };

    if slot.year < 1 {
        return Err(invalid_date("year must be positive"));
    }
    if slot.day < 1 || slot.day > 31 {
        return Err(invalid_date("day must be between 1 and 31"));
    }
    if slot.month < 1 || slot.month > 12 {
        return Err(invalid_date("month must be between 1 and 12"));
    }
    let date = NaiveDate::from_ymd_opt(slot.year, slot.month, slot.day)
        .ok_or_else(|| invalid_date("no such calendar day"))?;
    if date < today {
        return Err(invalid_date("date is in the past"));
    }

    if slot.start > 23 {
        return Err(PlanError::InvalidStartTime(slot.start));
    }
    if slot.end <= slot.start || slot.end > 24 {
        return Err(PlanError::InvalidEndTime {
            start: slot.start,
            end: slot.end,
        });
    }

    Ok(())
}

/// Vérifie qu'un candidat ne chevauche aucun quart existant de l'employé.
///
/// `exclude` retire le quart en cours d'édition de la comparaison, pour qu'un
/// quart réédité à l'identique ne se heurte pas à lui-même.
pub(super) fn ensure_no_overlap(
    candidate: &TimeSlot,
    existing: &[Shift],
    exclude: Option<&ShiftId>,
) -> Result<(), PlanError> {
    if let Some(hit) = util::first_collision(candidate, existing, exclude) {
        return Err(PlanError::Overlap {
            with: hit.id.clone(),
            employee: hit.owner.clone(),
        });
    }
    Ok(())
}
