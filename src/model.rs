use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Membre de la rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    /// Créneau occupé à la semaine de phase zéro. Indicatif : appliqué modulo
    /// le nombre de créneaux, jamais rejeté.
    pub initial_slot: i64,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N, initial_slot: i64) -> Self {
        Self {
            name: name.into(),
            initial_slot,
        }
    }
}

/// Créneau horaire (libellé libre + note optionnelle)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    pub time: String,
    #[serde(default)]
    pub note: String,
}

impl Timeslot {
    pub fn new<T: Into<String>>(time: T) -> Self {
        Self {
            time: time.into(),
            note: String::new(),
        }
    }

    pub fn with_note<T: Into<String>, N: Into<String>>(time: T, note: N) -> Self {
        Self {
            time: time.into(),
            note: note.into(),
        }
    }
}

/// Configuration canonique, persistée telle quelle (clés camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub employees: Vec<Employee>,
    pub timeslots: Vec<Timeslot>,
    /// Numéro de semaine servant de phase zéro aux deux rotations.
    pub start_week: i64,
    /// Permutation des indices d'employés pour l'astreinte.
    pub on_call_order: Vec<usize>,
    /// Position dans `on_call_order` de la personne d'astreinte à `start_week`.
    pub on_call_start_index: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        let employees: Vec<Employee> = (0..3)
            .map(|i| Employee::new(format!("Employee {}", i + 1), i))
            .collect();
        Self {
            on_call_order: (0..employees.len()).collect(),
            employees,
            timeslots: vec![
                Timeslot::new("9:00 AM - 5:00 PM"),
                Timeslot::new("9:30 AM - 5:30 PM"),
                Timeslot::new("7:30 AM - 3:30 PM"),
            ],
            start_week: 1,
            on_call_start_index: 0,
        }
    }
}

impl Configuration {
    pub fn empty() -> Self {
        Self {
            employees: Vec::new(),
            timeslots: Vec::new(),
            start_week: 1,
            on_call_order: Vec::new(),
            on_call_start_index: 0,
        }
    }

    pub fn find_employee(&self, name: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.name == name)
    }

    pub fn find_timeslot(&self, time: &str) -> Option<usize> {
        self.timeslots.iter().position(|t| t.time == time)
    }

    /// Rien à planifier : aucun employé ou aucun créneau.
    pub fn is_degenerate(&self) -> bool {
        self.employees.is_empty() || self.timeslots.is_empty()
    }
}

/// Intervalle lundi → dimanche (bornes incluses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            crate::calendar::format_date(self.start),
            crate::calendar::format_date(self.end)
        )
    }
}

/// Une ligne du planning : qui tient quel créneau.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub employee_name: String,
    pub timeslot_label: String,
    pub note: Option<String>,
}

/// Planning d'une semaine. Dérivé, jamais persisté.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekAssignment {
    pub week: u32,
    pub date_range: DateRange,
    pub assignments: Vec<Assignment>,
    pub on_call: Option<String>,
}

impl fmt::Display for WeekAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {} ({})", self.week, self.date_range)?;
        for a in &self.assignments {
            write!(f, "\n  {} → {}", a.employee_name, a.timeslot_label)?;
            if let Some(note) = &a.note {
                write!(f, " [{note}]")?;
            }
        }
        if let Some(name) = &self.on_call {
            write!(f, "\n  on call: {name}")?;
        }
        Ok(())
    }
}
