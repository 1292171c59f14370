use crate::model::WeekAssignment;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `name[,initial_slot]`
///
/// Les noms ne sont pas validés ici ; passer chaque ligne par
/// `Editor::add_employee`.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<(String, Option<i64>)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid employee row (empty name)");
        }
        let slot = match rec.get(1).map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(
                raw.parse::<i64>()
                    .with_context(|| format!("invalid initial_slot for {name}"))?,
            ),
            _ => None,
        };
        out.push((name.to_string(), slot));
    }
    Ok(out)
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    schedule: &[WeekAssignment],
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV: header `week,start,end,employee,timeslot,note,on_call`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &[WeekAssignment],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["week", "start", "end", "employee", "timeslot", "note", "on_call"])?;
    for week in schedule {
        let number = week.week.to_string();
        let start = week.date_range.start.to_string();
        let end = week.date_range.end.to_string();
        let on_call = week.on_call.as_deref().unwrap_or("");
        for a in &week.assignments {
            w.write_record([
                number.as_str(),
                start.as_str(),
                end.as_str(),
                a.employee_name.as_str(),
                a.timeslot_label.as_str(),
                a.note.as_deref().unwrap_or(""),
                on_call,
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
