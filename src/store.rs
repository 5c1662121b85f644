use crate::model::{Employee, EmployeeId, Roster, Shift, ShiftId};

/// Abstraction de persistance côté employés.
///
/// Les requêtes d'existence/unicité (`exists`, `find_by_email`) sont des
/// capacités du store, pas des parcours complets faits par l'appelant.
pub trait EmployeeStore {
    fn list_all(&self) -> anyhow::Result<Vec<Employee>>;
    fn get(&self, id: &EmployeeId) -> anyhow::Result<Option<Employee>>;
    fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Employee>>;
    fn exists(&self, id: &EmployeeId) -> anyhow::Result<bool>;
    fn insert(&mut self, employee: Employee) -> anyhow::Result<()>;
    /// Remplace la ligne complète ; `false` si l'id est inconnu.
    fn update(&mut self, employee: &Employee) -> anyhow::Result<bool>;
    fn delete(&mut self, id: &EmployeeId) -> anyhow::Result<bool>;
}

/// Abstraction de persistance côté quarts.
pub trait ShiftStore {
    fn list_all(&self) -> anyhow::Result<Vec<Shift>>;
    fn list_by_owner(&self, owner: &EmployeeId) -> anyhow::Result<Vec<Shift>>;
    fn get(&self, id: &ShiftId) -> anyhow::Result<Option<Shift>>;
    fn insert(&mut self, shift: Shift) -> anyhow::Result<()>;
    /// Remplace la ligne complète ; `false` si l'id est inconnu.
    fn update(&mut self, shift: &Shift) -> anyhow::Result<bool>;
    fn delete(&mut self, id: &ShiftId) -> anyhow::Result<bool>;
    /// `false` si la table était déjà vide.
    fn delete_all(&mut self) -> anyhow::Result<bool>;
    /// Supprime tous les quarts des propriétaires donnés ; `false` si aucune ligne touchée.
    fn delete_by_owners(&mut self, owners: &[EmployeeId]) -> anyhow::Result<bool>;
}

/// Store employés en mémoire (Vec), suffisant pour la lib et les tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeStore {
    rows: Vec<Employee>,
}

impl MemoryEmployeeStore {
    pub fn new(rows: Vec<Employee>) -> Self {
        Self { rows }
    }
}

impl EmployeeStore for MemoryEmployeeStore {
    fn list_all(&self) -> anyhow::Result<Vec<Employee>> {
        Ok(self.rows.clone())
    }

    fn get(&self, id: &EmployeeId) -> anyhow::Result<Option<Employee>> {
        Ok(self.rows.iter().find(|e| &e.id == id).cloned())
    }

    fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Employee>> {
        Ok(self.rows.iter().find(|e| e.email == email).cloned())
    }

    fn exists(&self, id: &EmployeeId) -> anyhow::Result<bool> {
        Ok(self.rows.iter().any(|e| &e.id == id))
    }

    fn insert(&mut self, employee: Employee) -> anyhow::Result<()> {
        self.rows.push(employee);
        Ok(())
    }

    fn update(&mut self, employee: &Employee) -> anyhow::Result<bool> {
        match self.rows.iter_mut().find(|e| e.id == employee.id) {
            Some(row) => {
                *row = employee.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &EmployeeId) -> anyhow::Result<bool> {
        let before = self.rows.len();
        self.rows.retain(|e| &e.id != id);
        Ok(self.rows.len() < before)
    }
}

/// Store quarts en mémoire (Vec).
#[derive(Debug, Clone, Default)]
pub struct MemoryShiftStore {
    rows: Vec<Shift>,
}

impl MemoryShiftStore {
    pub fn new(rows: Vec<Shift>) -> Self {
        Self { rows }
    }
}

impl ShiftStore for MemoryShiftStore {
    fn list_all(&self) -> anyhow::Result<Vec<Shift>> {
        Ok(self.rows.clone())
    }

    fn list_by_owner(&self, owner: &EmployeeId) -> anyhow::Result<Vec<Shift>> {
        Ok(self
            .rows
            .iter()
            .filter(|s| &s.owner == owner)
            .cloned()
            .collect())
    }

    fn get(&self, id: &ShiftId) -> anyhow::Result<Option<Shift>> {
        Ok(self.rows.iter().find(|s| &s.id == id).cloned())
    }

    fn insert(&mut self, shift: Shift) -> anyhow::Result<()> {
        self.rows.push(shift);
        Ok(())
    }

    fn update(&mut self, shift: &Shift) -> anyhow::Result<bool> {
        match self.rows.iter_mut().find(|s| s.id == shift.id) {
            Some(row) => {
                *row = shift.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &ShiftId) -> anyhow::Result<bool> {
        let before = self.rows.len();
        self.rows.retain(|s| &s.id != id);
        Ok(self.rows.len() < before)
    }

    fn delete_all(&mut self) -> anyhow::Result<bool> {
        let any = !self.rows.is_empty();
        self.rows.clear();
        Ok(any)
    }

    fn delete_by_owners(&mut self, owners: &[EmployeeId]) -> anyhow::Result<bool> {
        let before = self.rows.len();
        self.rows.retain(|s| !owners.contains(&s.owner));
        Ok(self.rows.len() < before)
    }
}

/// Construit les deux stores mémoire à partir d'un roster chargé.
pub fn memory_stores(roster: Roster) -> (MemoryEmployeeStore, MemoryShiftStore) {
    (
        MemoryEmployeeStore::new(roster.employees),
        MemoryShiftStore::new(roster.shifts),
    )
}
