/// Ensure a type identifier is a plain ASCII Rust identifier within `max_len`.
pub fn validate_type_ident(ident: &str, max_len: usize) -> Result<(), String> {
    validate_ident(ident, max_len)
}

/// Ensure a bound field identifier is a plain ASCII Rust identifier. Any
/// casing the compiler accepts is allowed.
pub fn validate_field_ident(ident: &str) -> Result<(), String> {
    validate_ident(ident, usize::MAX)
}

fn validate_ident(ident: &str, max_len: usize) -> Result<(), String> {
    if ident.is_empty() {
        return Err("ident is empty".to_string());
    }
    if ident.len() > max_len {
        return Err(format!("ident '{ident}' exceeds max length {max_len}"));
    }

    let mut chars = ident.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !(valid_start && valid_rest) {
        return Err(format!("ident '{ident}' is not a valid ASCII identifier"));
    }

    Ok(())
}
