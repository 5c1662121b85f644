use crate::model::{Shift, ShiftId, TimeSlot};

/// Deux créneaux se chevauchent-ils ?
///
/// Jamais entre deux dates différentes ; même jour, intervalles semi-ouverts :
/// deux quarts qui se touchent (fin 12h / début 12h) ne se chevauchent pas.
pub fn overlaps(a: &TimeSlot, b: &TimeSlot) -> bool {
    if !a.same_date(b) {
        return false;
    }
    a.start < b.end && b.start < a.end
}

/// Premier quart de `shifts` en collision avec `candidate`, en ignorant `exclude`.
pub(super) fn first_collision<'a>(
    candidate: &TimeSlot,
    shifts: &'a [Shift],
    exclude: Option<&ShiftId>,
) -> Option<&'a Shift> {
    shifts
        .iter()
        .filter(|s| exclude.map_or(true, |id| &s.id != id))
        .find(|s| overlaps(&s.slot, candidate))
}
