use crate::calendar::{week_date_range, week_number_of};
use crate::model::{Assignment, Configuration, WeekAssignment};
use crate::rotation;
use chrono::{Datelike, NaiveDate};

/// Nombre fixe de semaines générées par an. Les années ISO à 53 semaines
/// ne sont pas représentées.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Planning complet de `year`, semaines 1 à 52.
///
/// Vide si la configuration n'a aucun employé ou aucun créneau. Fonction pure :
/// deux appels avec la même configuration donnent le même résultat.
pub fn generate(config: &Configuration, year: i32) -> Vec<WeekAssignment> {
    if config.is_degenerate() {
        return Vec::new();
    }
    if rotation::needs_on_call_repair(config) {
        tracing::debug!(
            order_len = config.on_call_order.len(),
            employees = config.employees.len(),
            "on-call order diverges from roster, using identity order"
        );
    }
    let weeks: Vec<WeekAssignment> = (1..=WEEKS_PER_YEAR)
        .filter_map(|week| week_assignment(config, year, week))
        .collect();
    tracing::debug!(year, weeks = weeks.len(), "schedule generated");
    weeks
}

/// Planning d'une seule semaine.
pub fn week_assignment(config: &Configuration, year: i32, week: u32) -> Option<WeekAssignment> {
    if config.is_degenerate() {
        return None;
    }
    let week_num = i64::from(week);
    let date_range = week_date_range(year, week_num)?;
    let num_timeslots = config.timeslots.len();

    let assignments = config
        .employees
        .iter()
        .filter_map(|employee| {
            let idx = rotation::timeslot_index(
                employee.initial_slot,
                week_num,
                config.start_week,
                num_timeslots,
            )?;
            let slot = config.timeslots.get(idx)?;
            Some(Assignment {
                employee_name: employee.name.clone(),
                timeslot_label: slot.time.clone(),
                note: (!slot.note.is_empty()).then(|| slot.note.clone()),
            })
        })
        .collect();

    let on_call = rotation::on_call_employee(config, week_num)
        .and_then(|i| config.employees.get(i))
        .map(|e| e.name.clone());

    Some(WeekAssignment {
        week,
        date_range,
        assignments,
        on_call,
    })
}

/// Semaine en cours pour `today`.
///
/// Le numéro vient de `week_number_of`, l'année de `today` : début janvier
/// peut tomber en semaine 52/53 et, au-delà de 52, rien n'est trouvé.
pub fn current_week(config: &Configuration, today: NaiveDate) -> Option<WeekAssignment> {
    let week = week_number_of(today);
    if week > WEEKS_PER_YEAR {
        return None;
    }
    week_assignment(config, today.year(), week)
}
