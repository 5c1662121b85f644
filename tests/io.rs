#![forbid(unsafe_code)]
use horaires::{io, Planner, TimeSlot};
use std::fs;
use tempfile::tempdir;

fn slot(year: i32, month: u32, day: u32, start: u32, end: u32) -> TimeSlot {
    TimeSlot::new(year, month, day, start, end)
}

#[test]
fn import_employees_rejects_empty_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");

    fs::write(
        &path,
        "first_name,last_name,email\nAlice,Martin,alice@example.com\nBob,Durand,bob@example.com\n",
    )
    .unwrap();
    let employees = io::import_employees_csv(&path).unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].email, "alice@example.com");

    // champ vide : la ligne est rejetée
    fs::write(&path, "first_name,last_name,email\nAlice,,alice@example.com\n").unwrap();
    assert!(io::import_employees_csv(&path).is_err());
}

#[test]
fn import_shifts_rejects_bad_owner_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shifts.csv");

    let owner = horaires::EmployeeId::random();
    fs::write(
        &path,
        format!("owner_id,year,month,day,start,end\n{owner},2030,3,1,9,17\n"),
    )
    .unwrap();
    let rows = io::import_shifts_csv(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, owner);
    assert_eq!(rows[0].1, slot(2030, 3, 1, 9, 17));

    // owner_id qui n'est pas un UUID : import refusé
    fs::write(
        &path,
        "owner_id,year,month,day,start,end\nnot-a-uuid,2030,3,1,9,17\n",
    )
    .unwrap();
    assert!(io::import_shifts_csv(&path).is_err());

    // heure non numérique : refusé aussi
    fs::write(
        &path,
        format!("owner_id,year,month,day,start,end\n{owner},2030,3,1,neuf,17\n"),
    )
    .unwrap();
    assert!(io::import_shifts_csv(&path).is_err());
}

#[test]
fn export_resolves_owner_email_and_blanks_orphans() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("quarts.csv");

    let mut planner = Planner::in_memory();
    let a = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();
    let b = planner.create_employee("Bob", "Durand", "bob@example.com").unwrap();
    let sa = planner.create_shift(&a.id, slot(2030, 4, 1, 8, 12)).unwrap();
    let sb = planner.create_shift(&b.id, slot(2030, 4, 2, 9, 17)).unwrap();

    // Bob supprimé sans cascade : son quart devient orphelin
    assert!(planner.delete_employee(&b.id).unwrap());

    let roster = planner.to_roster();
    assert!(roster.find_employee_by_email("alice@example.com").is_some());
    assert!(roster.find_employee_by_email("bob@example.com").is_none());
    assert!(roster.find_shift(&sb.id).is_some());

    io::export_shifts_csv(&csv_path, &roster).unwrap();
    let exported = fs::read_to_string(&csv_path).unwrap();
    assert!(exported.contains(&format!("{},alice@example.com,2030-04-01,8,12", sa.id)));
    // quart orphelin : owner_email vide
    assert!(exported.contains(&format!("{},,2030-04-02,9,17", sb.id)));
}

#[test]
fn export_roster_json_is_reloadable() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("plan.json");

    let mut planner = Planner::in_memory();
    let a = planner.create_employee("Alice", "Martin", "alice@example.com").unwrap();
    planner.create_shift(&a.id, slot(2030, 4, 1, 8, 12)).unwrap();

    io::export_roster_json(&json_path, &planner.to_roster()).unwrap();

    use horaires::{JsonStorage, Storage};
    let reloaded = JsonStorage::open(&json_path).unwrap().load().unwrap();
    assert_eq!(reloaded.employees.len(), 1);
    assert_eq!(reloaded.shifts.len(), 1);
    assert_eq!(reloaded.shifts[0].owner, a.id);
}
