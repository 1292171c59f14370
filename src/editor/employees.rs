use super::{types::EditError, util, Editor};
use crate::model::Employee;

pub(super) fn add_employee(editor: &mut Editor, raw_name: &str) -> Result<usize, EditError> {
    let name = util::checked_name(raw_name)?;
    let config = &mut editor.config;
    if config.find_employee(&name).is_some() {
        return Err(EditError::DuplicateName(name));
    }

    let index = config.employees.len();
    let initial_slot = match config.timeslots.len() {
        0 => 0,
        n => (index % n) as i64,
    };
    editor.repair_on_call_order();

    let config = &mut editor.config;
    config.employees.push(Employee::new(name, initial_slot));
    config.on_call_order.push(index);
    Ok(index)
}

pub(super) fn remove_employee(editor: &mut Editor, index: usize) -> Result<Employee, EditError> {
    if index >= editor.config.employees.len() {
        return Err(EditError::UnknownEmployee(index));
    }
    editor.repair_on_call_order();

    let config = &mut editor.config;
    let removed = config.employees.remove(index);

    // l'ordre d'astreinte reste une permutation de la nouvelle liste
    if let Some(pos) = config.on_call_order.iter().position(|&i| i == index) {
        config.on_call_order.remove(pos);
        if pos < config.on_call_start_index {
            config.on_call_start_index -= 1;
        }
    }
    for entry in config.on_call_order.iter_mut() {
        if *entry > index {
            *entry -= 1;
        }
    }
    if config.on_call_start_index >= config.on_call_order.len() {
        config.on_call_start_index = 0;
    }
    Ok(removed)
}

pub(super) fn rename_employee(
    editor: &mut Editor,
    index: usize,
    raw_name: &str,
) -> Result<(), EditError> {
    if index >= editor.config.employees.len() {
        return Err(EditError::UnknownEmployee(index));
    }
    let name = util::checked_name(raw_name)?;
    let clash = editor
        .config
        .employees
        .iter()
        .enumerate()
        .any(|(i, e)| i != index && e.name == name);
    if clash {
        return Err(EditError::DuplicateName(name));
    }
    editor.config.employees[index].name = name;
    Ok(())
}

pub(super) fn set_initial_slot(
    editor: &mut Editor,
    index: usize,
    slot: i64,
) -> Result<(), EditError> {
    let employee = editor
        .config
        .employees
        .get_mut(index)
        .ok_or(EditError::UnknownEmployee(index))?;
    employee.initial_slot = slot;
    Ok(())
}
