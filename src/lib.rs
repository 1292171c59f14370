#![forbid(unsafe_code)]
//! Roulement — planning hebdomadaire tournant, local et sans BD.
//!
//! - Une liste d'employés tourne sur une liste de créneaux, semaine après semaine.
//! - Rotation d'astreinte indépendante (une personne par semaine).
//! - Configuration JSON, migrée depuis les anciennes formes au chargement.
//! - Génération pure : 52 semaines pour une année donnée.

pub mod calendar;
pub mod editor;
pub mod io;
pub mod migration;
pub mod model;
pub mod rotation;
pub mod schedule;
pub mod storage;

pub use calendar::{format_date, week_date_range, week_number_of};
pub use editor::{EditError, Editor};
pub use migration::{migrate, Migrated, RawConfig, SchemaVersion};
pub use model::{Assignment, Configuration, DateRange, Employee, Timeslot, WeekAssignment};
pub use schedule::{current_week, generate, week_assignment, WEEKS_PER_YEAR};
pub use storage::{load_configuration, ConfigStore, JsonStorage};
