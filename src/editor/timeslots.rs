use super::{types::EditError, util, Editor};
use crate::model::Timeslot;

pub(super) fn add_timeslot(
    editor: &mut Editor,
    raw_time: &str,
    note: &str,
) -> Result<usize, EditError> {
    let time = util::checked_label(raw_time)?;
    if editor.config.find_timeslot(&time).is_some() {
        return Err(EditError::DuplicateTimeslot(time));
    }
    editor
        .config
        .timeslots
        .push(Timeslot::with_note(time, note.trim()));
    Ok(editor.config.timeslots.len() - 1)
}

/// Les `initial_slot` des employés ne sont pas touchés : ils restent appliqués
/// modulo le nouveau nombre de créneaux.
pub(super) fn remove_timeslot(editor: &mut Editor, index: usize) -> Result<Timeslot, EditError> {
    if index >= editor.config.timeslots.len() {
        return Err(EditError::UnknownTimeslot(index));
    }
    Ok(editor.config.timeslots.remove(index))
}
