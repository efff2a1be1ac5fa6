use crate::error::AppError;

const MIN_LEN: usize = 2;

/// Normalizes an event slug: lowercase, whitespace runs become single
/// hyphens, anything outside `[a-z0-9-]` is stripped, hyphen runs collapse.
/// The slug is embedded in every shared link, so a result shorter than two
/// characters is rejected rather than silently accepted.
pub fn normalize(input: &str) -> Result<String, AppError> {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.trim().chars() {
        let c = c.to_ascii_lowercase();
        if c.is_whitespace() || c == '-' {
            pending_hyphen = !slug.is_empty();
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(c);
        }
        // Any other character is dropped without breaking a pending hyphen.
    }

    if slug.len() < MIN_LEN {
        return Err(AppError::Validation(
            "Slug must be at least 2 characters and only letters, numbers, and hyphens".into(),
        ));
    }

    Ok(slug)
}
