#![forbid(unsafe_code)]
use chrono::NaiveDate;
use horaires::{overlaps, validate_slot, PlanError, Planner, TimeSlot};

fn slot(year: i32, month: u32, day: u32, start: u32, end: u32) -> TimeSlot {
    TimeSlot::new(year, month, day, start, end)
}

#[test]
fn overlap_truth_table() {
    // dates différentes : jamais de chevauchement, mêmes heures ou pas
    assert!(!overlaps(&slot(2030, 1, 10, 9, 13), &slot(2030, 1, 11, 9, 13)));
    assert!(!overlaps(&slot(2030, 1, 10, 9, 13), &slot(2030, 2, 10, 9, 13)));
    assert!(!overlaps(&slot(2030, 1, 10, 9, 13), &slot(2031, 1, 10, 9, 13)));

    // même jour, intervalles sécants
    assert!(overlaps(&slot(2030, 1, 10, 9, 13), &slot(2030, 1, 10, 12, 15)));
    assert!(overlaps(&slot(2030, 1, 10, 12, 15), &slot(2030, 1, 10, 9, 13)));
    // inclusion complète
    assert!(overlaps(&slot(2030, 1, 10, 8, 20), &slot(2030, 1, 10, 10, 12)));
    // identiques
    assert!(overlaps(&slot(2030, 1, 10, 9, 13), &slot(2030, 1, 10, 9, 13)));

    // bords qui se touchent : pas un chevauchement (intervalles semi-ouverts)
    assert!(!overlaps(&slot(2030, 1, 10, 9, 12), &slot(2030, 1, 10, 12, 15)));
    assert!(!overlaps(&slot(2030, 1, 10, 12, 15), &slot(2030, 1, 10, 9, 12)));
}

#[test]
fn slot_validation_bounds() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

    assert!(validate_slot(&slot(2030, 6, 15, 9, 17), today).is_ok());
    // le jour même est accepté
    assert!(validate_slot(&slot(2026, 8, 29, 9, 17), today).is_ok());
    // journée complète
    assert!(validate_slot(&slot(2030, 6, 15, 0, 24), today).is_ok());

    assert!(matches!(
        validate_slot(&slot(2030, 6, 32, 9, 17), today),
        Err(PlanError::InvalidDate { .. })
    ));
    assert!(matches!(
        validate_slot(&slot(2030, 13, 15, 9, 17), today),
        Err(PlanError::InvalidDate { .. })
    ));
    assert!(matches!(
        validate_slot(&slot(0, 6, 15, 9, 17), today),
        Err(PlanError::InvalidDate { .. })
    ));
    // date passée
    assert!(matches!(
        validate_slot(&slot(2020, 6, 15, 9, 17), today),
        Err(PlanError::InvalidDate { .. })
    ));
    // jour calendaire inexistant
    assert!(matches!(
        validate_slot(&slot(2030, 2, 30, 9, 17), today),
        Err(PlanError::InvalidDate { .. })
    ));
    assert!(matches!(
        validate_slot(&slot(2030, 6, 15, 24, 24), today),
        Err(PlanError::InvalidStartTime(24))
    ));
    assert!(matches!(
        validate_slot(&slot(2030, 6, 15, 9, 9), today),
        Err(PlanError::InvalidEndTime { start: 9, end: 9 })
    ));
    assert!(matches!(
        validate_slot(&slot(2030, 6, 15, 9, 25), today),
        Err(PlanError::InvalidEndTime { start: 9, end: 25 })
    ));
}

#[test]
fn create_rejects_overlap_and_names_culprit() {
    let mut planner = Planner::in_memory();
    let emp = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();

    let first = planner.create_shift(&emp.id, slot(2030, 3, 1, 9, 17)).unwrap();

    let err = planner
        .create_shift(&emp.id, slot(2030, 3, 1, 16, 20))
        .unwrap_err();
    match err {
        PlanError::Overlap { with, employee } => {
            assert_eq!(with, first.id);
            assert_eq!(employee, emp.id);
        }
        other => panic!("expected Overlap, got {other}"),
    }

    // bord à bord : accepté
    planner.create_shift(&emp.id, slot(2030, 3, 1, 17, 20)).unwrap();
    assert_eq!(planner.shifts_of(&emp.id).unwrap().len(), 2);
}

#[test]
fn same_slot_different_employees_is_fine() {
    let mut planner = Planner::in_memory();
    let a = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();
    let b = planner.create_employee("Bob", "Durand", "bob@example.com").unwrap();

    planner.create_shift(&a.id, slot(2030, 3, 1, 9, 17)).unwrap();
    planner.create_shift(&b.id, slot(2030, 3, 1, 9, 17)).unwrap();
}

#[test]
fn edit_excludes_self_from_overlap_check() {
    let mut planner = Planner::in_memory();
    let emp = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();
    let shift = planner.create_shift(&emp.id, slot(2030, 1, 10, 9, 13)).unwrap();

    // réédité à l'identique : ne doit pas se heurter à lui-même
    let edited = planner
        .edit_shift(&shift.id, emp.id.as_str(), slot(2030, 1, 10, 9, 13))
        .unwrap();
    assert_eq!(edited.id, shift.id);
    assert_eq!(edited.slot, shift.slot);

    // mais un vrai conflit avec un autre quart reste rejeté
    let other = planner.create_shift(&emp.id, slot(2030, 1, 10, 14, 18)).unwrap();
    let err = planner
        .edit_shift(&shift.id, emp.id.as_str(), slot(2030, 1, 10, 15, 19))
        .unwrap_err();
    assert!(matches!(err, PlanError::Overlap { with, .. } if with == other.id));
}

#[test]
fn edit_rejects_unknown_shift_and_bad_owner() {
    let mut planner = Planner::in_memory();
    let emp = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();
    let shift = planner.create_shift(&emp.id, slot(2030, 1, 10, 9, 13)).unwrap();

    let ghost = horaires::ShiftId::random();
    assert!(matches!(
        planner.edit_shift(&ghost, emp.id.as_str(), slot(2030, 1, 11, 9, 13)),
        Err(PlanError::UnknownShift(_))
    ));

    assert!(matches!(
        planner.edit_shift(&shift.id, "not-a-uuid", slot(2030, 1, 11, 9, 13)),
        Err(PlanError::InvalidId(_))
    ));

    let ghost_owner = horaires::EmployeeId::random();
    assert!(matches!(
        planner.edit_shift(&shift.id, ghost_owner.as_str(), slot(2030, 1, 11, 9, 13)),
        Err(PlanError::UnknownEmployee(_))
    ));
}

#[test]
fn edit_can_reassign_owner() {
    let mut planner = Planner::in_memory();
    let a = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();
    let b = planner.create_employee("Bob", "Durand", "bob@example.com").unwrap();
    let shift = planner.create_shift(&a.id, slot(2030, 1, 10, 9, 13)).unwrap();

    let edited = planner
        .edit_shift(&shift.id, b.id.as_str(), slot(2030, 1, 10, 9, 13))
        .unwrap();
    assert_eq!(edited.owner, b.id);
    assert!(planner.shifts_of(&a.id).unwrap().is_empty());
    assert_eq!(planner.shifts_of(&b.id).unwrap().len(), 1);
}

#[test]
fn delete_shift_signals_absence() {
    let mut planner = Planner::in_memory();
    let emp = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();
    let shift = planner.create_shift(&emp.id, slot(2030, 1, 10, 9, 13)).unwrap();

    assert!(planner.delete_shift(&shift.id).unwrap());
    // idempotent : l'absence est un signal, pas une erreur
    assert!(!planner.delete_shift(&shift.id).unwrap());
}

#[test]
fn end_to_end_scenario() {
    let mut planner = Planner::in_memory();
    let e1 = planner.create_employee("Emma", "Leroy", "emma@example.com").unwrap();

    let first = planner.create_shift(&e1.id, slot(2030, 3, 1, 9, 17)).unwrap();

    let err = planner
        .create_shift(&e1.id, slot(2030, 3, 1, 16, 20))
        .unwrap_err();
    assert!(matches!(err, PlanError::Overlap { with, .. } if with == first.id));

    planner.create_shift(&e1.id, slot(2030, 3, 1, 17, 20)).unwrap();
    assert_eq!(planner.shifts_of(&e1.id).unwrap().len(), 2);
}
