//! Numérotation des semaines et bornes lundi → dimanche.

use crate::model::DateRange;
use chrono::{Datelike, Duration, NaiveDate};

/// Numéro de semaine d'une date (règle du jeudi).
///
/// La date est ramenée au jeudi de sa semaine (lundi → dimanche), puis on
/// compte les semaines entamées depuis le 1er janvier de l'année de ce jeudi.
/// Le 1er janvier peut donc appartenir à la semaine 52/53 de l'année
/// précédente.
pub fn week_number_of(date: NaiveDate) -> u32 {
    let weekday = i64::from(date.weekday().number_from_monday());
    // aux bornes extrêmes de chrono, on garde la date telle quelle
    let thursday = date
        .checked_add_signed(Duration::days(4 - weekday))
        .unwrap_or(date);
    // ordinal0 = jours écoulés depuis le 1er janvier de l'année du jeudi
    let days = thursday.ordinal0() + 1;
    days.div_ceil(7)
}

/// Bornes de la semaine `week` de `year`.
///
/// Ancre : premier lundi le ou après le 1er janvier, sauf si le 1er janvier
/// tombe du lundi au jeudi, auquel cas la semaine 1 commence le lundi
/// précédent (ou le 1er janvier lui-même). Aucun contrôle de borne sur
/// `week` : 53 et au-delà sont extrapolés.
///
/// `None` seulement si chrono ne sait pas représenter la date.
pub fn week_date_range(year: i32, week: i64) -> Option<DateRange> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let day = i64::from(jan1.weekday().num_days_from_sunday());

    let first_monday = if (1..=4).contains(&day) {
        jan1.checked_sub_signed(Duration::days(day - 1))?
    } else {
        jan1.checked_add_signed(Duration::days((8 - day) % 7))?
    };

    let offset = week.checked_sub(1)?.checked_mul(7)?;
    let start = first_monday.checked_add_signed(Duration::try_days(offset)?)?;
    let end = start.checked_add_signed(Duration::days(6))?;
    Some(DateRange { start, end })
}

/// Mois abrégé + jour, ex. `Jan 5`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
