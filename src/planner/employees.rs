use super::{PlanError, Planner};
use crate::model::{Employee, EmployeeId};
use crate::store::{EmployeeStore, ShiftStore};

pub(super) fn create_employee<E, S>(
    planner: &mut Planner<E, S>,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<Employee, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    if planner.employees.find_by_email(email)?.is_some() {
        return Err(PlanError::DuplicateEmail(email.to_owned()));
    }
    let employee = Employee::new(first_name, last_name, email);
    planner.employees.insert(employee.clone())?;
    Ok(employee)
}

pub(super) fn edit_employee<E, S>(
    planner: &mut Planner<E, S>,
    id: &EmployeeId,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<Employee, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    let current = planner
        .employees
        .get(id)?
        .ok_or_else(|| PlanError::UnknownEmployee(id.to_string()))?;

    // L'email ne doit entrer en conflit qu'avec un *autre* employé.
    if let Some(other) = planner.employees.find_by_email(email)? {
        if other.id != current.id {
            return Err(PlanError::DuplicateEmail(email.to_owned()));
        }
    }

    let updated = Employee {
        id: current.id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
    };
    if !planner.employees.update(&updated)? {
        return Err(PlanError::Persistence("employee update"));
    }
    Ok(updated)
}

/// Supprime l'employé seul : ses quarts ne sont PAS supprimés en cascade et
/// restent orphelins. Passer par `delete_shifts_for_employees` d'abord.
pub(super) fn delete_employee<E, S>(
    planner: &mut Planner<E, S>,
    id: &EmployeeId,
) -> Result<bool, PlanError>
where
    E: EmployeeStore,
    S: ShiftStore,
{
    Ok(planner.employees.delete(id)?)
}
