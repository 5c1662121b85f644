use crate::model::{Employee, EmployeeId, Roster, TimeSlot};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `first_name,last_name,email`
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let first = rec.get(0).context("missing first_name")?.trim();
        let last = rec.get(1).context("missing last_name")?.trim();
        let email = rec.get(2).context("missing email")?.trim();
        if first.is_empty() || last.is_empty() || email.is_empty() {
            bail!("invalid employee row (empty field)");
        }
        out.push(Employee::new(first, last, email));
    }
    Ok(out)
}

/// Import de quarts: header `owner_id,year,month,day,start,end`
///
/// Les créneaux ne sont pas validés ici ; l'appelant les passe au planner
/// qui applique les règles (date, bornes, chevauchement).
pub fn import_shifts_csv<P: AsRef<Path>>(
    path: P,
) -> anyhow::Result<Vec<(EmployeeId, TimeSlot)>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let owner_raw = rec.get(0).context("missing owner_id")?.trim();
        let owner = EmployeeId::parse(owner_raw)
            .with_context(|| format!("invalid owner_id: {owner_raw}"))?;
        let year = parse_field(&rec, 1, "year")?;
        let month = parse_field(&rec, 2, "month")?;
        let day = parse_field(&rec, 3, "day")?;
        let start = parse_field(&rec, 4, "start")?;
        let end = parse_field(&rec, 5, "end")?;
        out.push((
            owner,
            TimeSlot::new(year as i32, month, day, start, end),
        ));
    }
    Ok(out)
}

fn parse_field(rec: &csv::StringRecord, idx: usize, name: &'static str) -> anyhow::Result<u32> {
    rec.get(idx)
        .with_context(|| format!("missing {name}"))?
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid {name}"))
}

/// Export JSON du roster (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des quarts: header `id,owner_email,date,start,end`
///
/// L'email du propriétaire est résolu via le roster ; vide pour un quart
/// orphelin (employé supprimé sans cascade).
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "owner_email", "date", "start", "end"])?;
    for s in &roster.shifts {
        let owner_email = roster
            .find_employee_by_id(&s.owner)
            .map(|e| e.email.as_str())
            .unwrap_or("");
        let date = format!("{:04}-{:02}-{:02}", s.slot.year, s.slot.month, s.slot.day);
        let start = s.slot.start.to_string();
        let end = s.slot.end.to_string();
        w.write_record([s.id.as_str(), owner_email, date.as_str(), start.as_str(), end.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
