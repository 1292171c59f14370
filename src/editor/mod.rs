mod employees;
mod on_call;
mod timeslots;
mod types;
mod util;

pub use types::{EditError, MAX_NAME_LEN};
pub use util::sanitize_name;

use crate::model::{Configuration, Employee, Timeslot};
use crate::rotation;

/// Editor : seule porte d'entrée pour modifier une Configuration.
///
/// Chaque opération valide d'abord puis applique tout le changement ; une
/// erreur laisse la configuration intacte.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    config: Configuration,
}

impl Editor {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }
    pub fn into_config(self) -> Configuration {
        self.config
    }

    pub fn find_employee(&self, name: &str) -> Option<usize> {
        self.config.find_employee(name)
    }

    /// Comme `find_employee`, mais en erreur si le nom est inconnu.
    pub fn employee_index(&self, name: &str) -> Result<usize, EditError> {
        self.find_employee(name)
            .ok_or_else(|| EditError::UnknownEmployeeName(name.to_string()))
    }

    pub fn find_timeslot(&self, time: &str) -> Option<usize> {
        self.config.find_timeslot(time)
    }

    /// Ajoute un employé en fin de liste et en fin d'ordre d'astreinte.
    pub fn add_employee(&mut self, name: &str) -> Result<usize, EditError> {
        employees::add_employee(self, name)
    }

    pub fn remove_employee(&mut self, index: usize) -> Result<Employee, EditError> {
        employees::remove_employee(self, index)
    }

    pub fn rename_employee(&mut self, index: usize, name: &str) -> Result<(), EditError> {
        employees::rename_employee(self, index, name)
    }

    pub fn set_initial_slot(&mut self, index: usize, slot: i64) -> Result<(), EditError> {
        employees::set_initial_slot(self, index, slot)
    }

    pub fn add_timeslot(&mut self, time: &str, note: &str) -> Result<usize, EditError> {
        timeslots::add_timeslot(self, time, note)
    }

    pub fn remove_timeslot(&mut self, index: usize) -> Result<Timeslot, EditError> {
        timeslots::remove_timeslot(self, index)
    }

    pub fn move_on_call(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        on_call::move_on_call(self, from, to)
    }

    pub fn set_on_call_start_index(&mut self, index: usize) -> Result<(), EditError> {
        on_call::set_on_call_start_index(self, index)
    }

    pub fn set_start_week(&mut self, week: i64) {
        self.config.start_week = week;
    }

    fn repair_on_call_order(&mut self) {
        if rotation::needs_on_call_repair(&self.config) {
            self.config.on_call_order = (0..self.config.employees.len()).collect();
            self.config.on_call_start_index = 0;
        }
    }
}

impl Configuration {
    /// Vérifie les invariants d'édition sur une configuration chargée.
    pub fn validate(&self) -> Result<(), EditError> {
        for (i, employee) in self.employees.iter().enumerate() {
            if employee.name.trim().is_empty() {
                return Err(EditError::EmptyName);
            }
            if employee.name.chars().count() > MAX_NAME_LEN {
                return Err(EditError::NameTooLong { max: MAX_NAME_LEN });
            }
            if self.employees[..i].iter().any(|e| e.name == employee.name) {
                return Err(EditError::DuplicateName(employee.name.clone()));
            }
        }
        if self.timeslots.iter().any(|t| t.time.trim().is_empty()) {
            return Err(EditError::EmptyTimeslot);
        }
        Ok(())
    }
}
