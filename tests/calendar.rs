#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use roulement::{format_date, week_date_range, week_number_of};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn week_number_follows_thursday_rule() {
    assert_eq!(week_number_of(d(2025, 6, 15)), 24);
    assert_eq!(week_number_of(d(2026, 10, 15)), 42);
    // 30 déc. 2024 appartient à la semaine 1 de 2025
    assert_eq!(week_number_of(d(2024, 12, 30)), 1);
}

#[test]
fn january_first_can_belong_to_previous_year() {
    // vendredi 1er janvier 2021 -> semaine 53 de 2020
    assert_eq!(week_number_of(d(2021, 1, 1)), 53);
    // dimanche 1er janvier 2023 -> semaine 52 de 2022
    assert_eq!(week_number_of(d(2023, 1, 1)), 52);
}

#[test]
fn week_number_matches_chrono_iso_week() {
    let mut day = d(2019, 12, 1);
    while day < d(2028, 2, 1) {
        assert_eq!(week_number_of(day), day.iso_week().week(), "{day}");
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn first_week_anchor_per_weekday_of_january_first() {
    // lundi
    assert_eq!(week_date_range(2024, 1).unwrap().start, d(2024, 1, 1));
    // mercredi -> tiré en arrière
    assert_eq!(week_date_range(2025, 1).unwrap().start, d(2024, 12, 30));
    // jeudi
    assert_eq!(week_date_range(2026, 1).unwrap().start, d(2025, 12, 29));
    // vendredi -> lundi suivant
    assert_eq!(week_date_range(2027, 1).unwrap().start, d(2027, 1, 4));
    // samedi
    assert_eq!(week_date_range(2022, 1).unwrap().start, d(2022, 1, 3));
    // dimanche
    assert_eq!(week_date_range(2023, 1).unwrap().start, d(2023, 1, 2));
}

#[test]
fn week_one_starts_on_monday_near_new_year() {
    for year in 1970..=2100 {
        let range = week_date_range(year, 1).unwrap();
        assert_eq!(range.start.weekday(), Weekday::Mon, "{year}");
        assert!(range.start >= d(year - 1, 12, 29), "{year}");
        assert!(range.start <= d(year, 1, 4), "{year}");
        assert_eq!(range.end, range.start + chrono::Duration::days(6));
    }
}

#[test]
fn out_of_range_weeks_extrapolate() {
    let w52 = week_date_range(2025, 52).unwrap();
    assert_eq!(w52.start, d(2025, 12, 22));
    assert_eq!(w52.end, d(2025, 12, 28));

    let w53 = week_date_range(2025, 53).unwrap();
    assert_eq!(w53.start, week_date_range(2026, 1).unwrap().start);

    let w0 = week_date_range(2025, 0).unwrap();
    assert_eq!(w0.start, d(2024, 12, 23));
}

#[test]
fn formats_abbreviated_month_and_day() {
    assert_eq!(format_date(d(2025, 1, 5)), "Jan 5");
    assert_eq!(format_date(d(2024, 12, 30)), "Dec 30");
    assert_eq!(week_date_range(2025, 1).unwrap().to_string(), "Dec 30 - Jan 5");
}
