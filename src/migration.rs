//! Normalisation des configurations stockées vers la forme canonique.
//!
//! Les anciennes versions stockaient employés et créneaux sous forme de
//! simples chaînes, puis sans ordre d'astreinte. Chaque étape de la chaîne
//! ci-dessous reconnaît une de ces formes et la réécrit ; elles sont totales,
//! idempotentes et indépendantes les unes des autres. La migration ne rejette
//! jamais rien : la validation se fait dans `editor`.

use crate::model::{Configuration, Employee, Timeslot};
use serde::{Deserialize, Serialize};

/// Forme historique d'une configuration stockée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Employés et créneaux en chaînes nues.
    BareLists = 1,
    /// Enregistrements, sans ordre d'astreinte.
    Records = 2,
    /// Forme canonique.
    OnCall = 3,
}

pub const CURRENT_VERSION: SchemaVersion = SchemaVersion::OnCall;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEmployee {
    Name(String),
    Record {
        name: String,
        #[serde(rename = "initialSlot", default)]
        initial_slot: Option<i64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimeslot {
    Label(String),
    Record {
        time: String,
        #[serde(default)]
        note: Option<String>,
    },
}

/// Configuration telle que lue dans le stockage, de forme inconnue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub employees: Vec<RawEmployee>,
    #[serde(default)]
    pub timeslots: Vec<RawTimeslot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_call_order: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_call_start_index: Option<usize>,
}

impl From<Configuration> for RawConfig {
    fn from(config: Configuration) -> Self {
        Self {
            employees: config
                .employees
                .into_iter()
                .map(|e| RawEmployee::Record {
                    name: e.name,
                    initial_slot: Some(e.initial_slot),
                })
                .collect(),
            timeslots: config
                .timeslots
                .into_iter()
                .map(|t| RawTimeslot::Record {
                    time: t.time,
                    note: Some(t.note),
                })
                .collect(),
            start_week: Some(config.start_week),
            on_call_order: Some(config.on_call_order),
            on_call_start_index: Some(config.on_call_start_index),
        }
    }
}

/// Résultat d'une migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migrated {
    pub config: Configuration,
    /// Vrai si au moins une étape a réécrit quelque chose : il faut sauvegarder.
    pub changed: bool,
    pub from: SchemaVersion,
}

struct Upgrade {
    target: SchemaVersion,
    name: &'static str,
    apply: fn(&mut RawConfig) -> bool,
}

const UPGRADES: &[Upgrade] = &[
    Upgrade {
        target: SchemaVersion::Records,
        name: "wrap bare employee names",
        apply: wrap_bare_employees,
    },
    Upgrade {
        target: SchemaVersion::Records,
        name: "wrap bare timeslot labels",
        apply: wrap_bare_timeslots,
    },
    Upgrade {
        target: SchemaVersion::OnCall,
        name: "synthesize on-call order",
        apply: synthesize_on_call,
    },
    Upgrade {
        target: SchemaVersion::OnCall,
        name: "default start week",
        apply: default_start_week,
    },
];

/// Forme la plus ancienne encore présente dans `raw`.
pub fn detect_version(raw: &RawConfig) -> SchemaVersion {
    let bare_employee = raw
        .employees
        .iter()
        .any(|e| matches!(e, RawEmployee::Name(_)));
    let bare_timeslot = raw
        .timeslots
        .iter()
        .any(|t| matches!(t, RawTimeslot::Label(_)));
    if bare_employee || bare_timeslot {
        SchemaVersion::BareLists
    } else if raw.on_call_order.is_none() {
        SchemaVersion::Records
    } else {
        SchemaVersion::OnCall
    }
}

/// Applique toute la chaîne et produit la configuration canonique.
pub fn migrate(mut raw: RawConfig) -> Migrated {
    let from = detect_version(&raw);
    let mut changed = false;
    for step in UPGRADES {
        if (step.apply)(&mut raw) {
            tracing::debug!(step = step.name, version = ?step.target, "migration step applied");
            changed = true;
        }
    }
    Migrated {
        config: finish(raw),
        changed,
        from,
    }
}

fn wrap_bare_employees(raw: &mut RawConfig) -> bool {
    let num_timeslots = raw.timeslots.len();
    let mut changed = false;
    for (index, entry) in raw.employees.iter_mut().enumerate() {
        let slot = default_slot(index, num_timeslots);
        let replacement = match entry {
            RawEmployee::Name(name) => RawEmployee::Record {
                name: std::mem::take(name),
                initial_slot: Some(slot),
            },
            RawEmployee::Record {
                name,
                initial_slot: None,
            } => RawEmployee::Record {
                name: std::mem::take(name),
                initial_slot: Some(slot),
            },
            RawEmployee::Record { .. } => continue,
        };
        *entry = replacement;
        changed = true;
    }
    changed
}

fn wrap_bare_timeslots(raw: &mut RawConfig) -> bool {
    let mut changed = false;
    for entry in raw.timeslots.iter_mut() {
        if let RawTimeslot::Label(label) = entry {
            let time = std::mem::take(label);
            *entry = RawTimeslot::Record {
                time,
                note: Some(String::new()),
            };
            changed = true;
        }
    }
    changed
}

fn synthesize_on_call(raw: &mut RawConfig) -> bool {
    if raw.on_call_order.is_none() {
        raw.on_call_order = Some((0..raw.employees.len()).collect());
        raw.on_call_start_index = Some(0);
        return true;
    }
    if raw.on_call_start_index.is_none() {
        raw.on_call_start_index = Some(0);
        return true;
    }
    false
}

fn default_start_week(raw: &mut RawConfig) -> bool {
    if raw.start_week.is_none() {
        raw.start_week = Some(1);
        return true;
    }
    false
}

/// `index mod T`, ou 0 sans créneau.
fn default_slot(index: usize, num_timeslots: usize) -> i64 {
    if num_timeslots == 0 {
        0
    } else {
        (index % num_timeslots) as i64
    }
}

// Conversion totale : les valeurs de repli ne servent que si la chaîne n'a
// pas tourné.
fn finish(raw: RawConfig) -> Configuration {
    let num_timeslots = raw.timeslots.len();
    let employees = raw
        .employees
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            RawEmployee::Name(name) => Employee::new(name, default_slot(index, num_timeslots)),
            RawEmployee::Record { name, initial_slot } => Employee::new(
                name,
                initial_slot.unwrap_or_else(|| default_slot(index, num_timeslots)),
            ),
        })
        .collect::<Vec<_>>();
    let timeslots = raw
        .timeslots
        .into_iter()
        .map(|entry| match entry {
            RawTimeslot::Label(time) => Timeslot::new(time),
            RawTimeslot::Record { time, note } => Timeslot::with_note(time, note.unwrap_or_default()),
        })
        .collect();
    Configuration {
        on_call_order: raw
            .on_call_order
            .unwrap_or_else(|| (0..employees.len()).collect()),
        employees,
        timeslots,
        start_week: raw.start_week.unwrap_or(1),
        on_call_start_index: raw.on_call_start_index.unwrap_or(0),
    }
}
