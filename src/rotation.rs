//! Rotation des créneaux et rotation d'astreinte.
//!
//! Deux rotations indépendantes, toutes deux calculées en modulo « plancher »
//! (`rem_euclid`) à partir de `week - start_week`, qui peut être négatif.

use crate::model::Configuration;
use std::borrow::Cow;

/// Reste toujours dans `[0, n)` pour `n > 0`, quel que soit le signe de `x`.
pub fn floor_mod(x: i128, n: i128) -> i128 {
    x.rem_euclid(n)
}

/// Décalage de la semaine `week` par rapport à la phase zéro.
pub fn rotation_week(week: i64, start_week: i64) -> i128 {
    i128::from(week) - i128::from(start_week)
}

/// Indice du créneau d'un employé pour une semaine donnée.
///
/// `None` si `num_timeslots == 0`.
pub fn timeslot_index(
    initial_slot: i64,
    week: i64,
    start_week: i64,
    num_timeslots: usize,
) -> Option<usize> {
    if num_timeslots == 0 {
        return None;
    }
    let n = num_timeslots as i128;
    let idx = floor_mod(i128::from(initial_slot) + rotation_week(week, start_week), n);
    usize::try_from(idx).ok()
}

/// Ordre d'astreinte utilisable avec la liste d'employés courante.
///
/// Si sa longueur diverge du nombre d'employés, il est remplacé par
/// l'identité `[0, 1, ..., n-1]`.
pub fn effective_on_call_order(config: &Configuration) -> Cow<'_, [usize]> {
    if needs_on_call_repair(config) {
        Cow::Owned((0..config.employees.len()).collect())
    } else {
        Cow::Borrowed(&config.on_call_order)
    }
}

pub fn needs_on_call_repair(config: &Configuration) -> bool {
    config.on_call_order.len() != config.employees.len()
}

/// Position dans l'ordre d'astreinte pour une semaine. `None` si l'ordre est vide.
pub fn on_call_position(
    week: i64,
    start_week: i64,
    start_index: usize,
    order_len: usize,
) -> Option<usize> {
    if order_len == 0 {
        return None;
    }
    let k = order_len as i128;
    let offset = floor_mod(rotation_week(week, start_week), k);
    let pos = floor_mod(start_index as i128 + offset, k);
    usize::try_from(pos).ok()
}

/// Indice de l'employé d'astreinte pour `week`.
///
/// `None` si aucun ordre n'est configuré ou si l'entrée pointe hors de la
/// liste d'employés (ordre périmé).
pub fn on_call_employee(config: &Configuration, week: i64) -> Option<usize> {
    let order = effective_on_call_order(config);
    let pos = on_call_position(week, config.start_week, config.on_call_start_index, order.len())?;
    let employee = *order.get(pos)?;
    (employee < config.employees.len()).then_some(employee)
}
