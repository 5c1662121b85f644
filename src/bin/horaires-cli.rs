#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use horaires::{
    io,
    model::{EmployeeId, ShiftId, TimeSlot},
    planner::Planner,
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification de quarts (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du plan
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un employé
    AddEmployee {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },

    /// Modifier un employé existant
    EditEmployee {
        #[arg(long)]
        id: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },

    /// Supprimer un employé (ses quarts restent, orphelins)
    RemoveEmployee {
        #[arg(long)]
        id: String,
    },

    /// Lister les employés
    ListEmployees,

    /// Créer un quart pour un employé
    AddShift {
        #[arg(long)]
        employee: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        /// Heure de début (0-23)
        #[arg(long)]
        start: u32,
        /// Heure de fin (start+1 à 24)
        #[arg(long)]
        end: u32,
    },

    /// Rééditer un quart (propriétaire compris)
    EditShift {
        #[arg(long)]
        id: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        #[arg(long)]
        start: u32,
        #[arg(long)]
        end: u32,
    },

    /// Supprimer un quart
    RemoveShift {
        #[arg(long)]
        id: String,
    },

    /// Supprimer des quarts en masse
    ClearShifts {
        /// Tout supprimer, sans condition
        #[arg(long, conflicts_with = "employees")]
        all: bool,
        /// Liste "id1,id2,..." ; le lot entier est rejeté au moindre id invalide
        #[arg(long)]
        employees: Option<String>,
    },

    /// Échanger les propriétaires de deux quarts
    Swap {
        #[arg(long)]
        shift_a: String,
        #[arg(long)]
        shift_b: String,
    },

    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Importer des quarts depuis un CSV (validés un par un)
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut planner = match storage.load() {
        Ok(roster) => Planner::from_roster(roster),
        Err(_) => Planner::in_memory(),
    };

    let code = match cli.cmd {
        Commands::AddEmployee {
            first_name,
            last_name,
            email,
        } => {
            let employee = planner.create_employee(&first_name, &last_name, &email)?;
            storage.save(&planner.to_roster())?;
            println!("{}", employee.id);
            0
        }
        Commands::EditEmployee {
            id,
            first_name,
            last_name,
            email,
        } => {
            let id = parse_employee_id(&id)?;
            planner.edit_employee(&id, &first_name, &last_name, &email)?;
            storage.save(&planner.to_roster())?;
            0
        }
        Commands::RemoveEmployee { id } => {
            let id = parse_employee_id(&id)?;
            if !planner.delete_employee(&id)? {
                eprintln!("no employee with id {id}");
                1
            } else {
                let orphans = planner.shifts_of(&id)?.len();
                if orphans > 0 {
                    eprintln!(
                        "warning: {orphans} shift(s) still reference {id}; \
                         use clear-shifts --employees before removing next time"
                    );
                }
                storage.save(&planner.to_roster())?;
                0
            }
        }
        Commands::ListEmployees => {
            for e in planner.list_employees()? {
                println!("{} | {} {} | {}", e.id, e.first_name, e.last_name, e.email);
            }
            0
        }
        Commands::AddShift {
            employee,
            year,
            month,
            day,
            start,
            end,
        } => {
            let owner = parse_employee_id(&employee)?;
            let shift = planner.create_shift(&owner, TimeSlot::new(year, month, day, start, end))?;
            storage.save(&planner.to_roster())?;
            println!("{}", shift.id);
            0
        }
        Commands::EditShift {
            id,
            owner,
            year,
            month,
            day,
            start,
            end,
        } => {
            let shift_id =
                ShiftId::parse(&id).map_err(|_| anyhow::anyhow!("not a valid shift id: {id}"))?;
            planner.edit_shift(&shift_id, &owner, TimeSlot::new(year, month, day, start, end))?;
            storage.save(&planner.to_roster())?;
            0
        }
        Commands::RemoveShift { id } => {
            let shift_id =
                ShiftId::parse(&id).map_err(|_| anyhow::anyhow!("not a valid shift id: {id}"))?;
            if planner.delete_shift(&shift_id)? {
                storage.save(&planner.to_roster())?;
                0
            } else {
                eprintln!("no shift with id {shift_id}");
                1
            }
        }
        Commands::ClearShifts { all, employees } => {
            let affected = if all {
                planner.delete_all_shifts()?
            } else {
                let ids: Vec<String> = employees
                    .unwrap_or_default()
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if ids.is_empty() {
                    anyhow::bail!("nothing to clear: pass --all or --employees id1,id2,...");
                }
                planner.delete_shifts_for_employees(&ids)?
            };
            storage.save(&planner.to_roster())?;
            if !affected {
                eprintln!("no shift deleted");
            }
            0
        }
        Commands::Swap { shift_a, shift_b } => {
            planner.swap_shifts(&shift_a, &shift_b)?;
            storage.save(&planner.to_roster())?;
            println!("swap done");
            0
        }
        Commands::ImportEmployees { csv } => {
            let employees = io::import_employees_csv(csv)?;
            for e in employees {
                planner.create_employee(&e.first_name, &e.last_name, &e.email)?;
            }
            storage.save(&planner.to_roster())?;
            0
        }
        Commands::ImportShifts { csv } => {
            let rows = io::import_shifts_csv(csv)?;
            for (owner, slot) in rows {
                planner.create_shift(&owner, slot)?;
            }
            storage.save(&planner.to_roster())?;
            0
        }
        Commands::List { out_json, out_csv } => {
            let roster = planner.to_roster();
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, &roster)?;
            }
            // impression compacte
            for s in &roster.shifts {
                let owner = roster
                    .find_employee_by_id(&s.owner)
                    .map(|e| e.email.as_str())
                    .unwrap_or("-");
                println!(
                    "{} | {:04}-{:02}-{:02} {:02}h → {:02}h | {}",
                    s.id, s.slot.year, s.slot.month, s.slot.day, s.slot.start, s.slot.end, owner
                );
            }
            0
        }
    };

    std::process::exit(code);
}

fn parse_employee_id(raw: &str) -> Result<EmployeeId> {
    EmployeeId::parse(raw).map_err(|_| anyhow::anyhow!("not a valid employee id: {raw}"))
}
