use super::{types::EditError, Editor};

/// Déplace l'élément en position `from` vers la position `to`.
pub(super) fn move_on_call(editor: &mut Editor, from: usize, to: usize) -> Result<(), EditError> {
    editor.repair_on_call_order();
    let order = &mut editor.config.on_call_order;
    if from >= order.len() {
        return Err(EditError::InvalidOnCallPosition(from));
    }
    if to >= order.len() {
        return Err(EditError::InvalidOnCallPosition(to));
    }
    let entry = order.remove(from);
    order.insert(to, entry);
    Ok(())
}

pub(super) fn set_on_call_start_index(editor: &mut Editor, index: usize) -> Result<(), EditError> {
    editor.repair_on_call_order();
    let len = editor.config.on_call_order.len();
    if index >= len.max(1) {
        return Err(EditError::InvalidOnCallPosition(index));
    }
    editor.config.on_call_start_index = index;
    Ok(())
}
