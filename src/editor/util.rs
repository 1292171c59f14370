use super::types::{EditError, MAX_NAME_LEN};

const HTML_UNSAFE: [char; 5] = ['<', '>', '&', '"', '\''];

/// Retire les caractères HTML sensibles puis les espaces de bord.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !HTML_UNSAFE.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Nom assaini et validé (1 à 50 caractères).
pub(super) fn checked_name(raw: &str) -> Result<String, EditError> {
    let name = sanitize_name(raw);
    if name.is_empty() {
        return Err(EditError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(EditError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(name)
}

pub(super) fn checked_label(raw: &str) -> Result<String, EditError> {
    let label = raw.trim();
    if label.is_empty() {
        return Err(EditError::EmptyTimeslot);
    }
    Ok(label.to_string())
}
