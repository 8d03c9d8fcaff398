//! Pure string validators and sanitizers.
//!
//! Total functions with no side effects. The email check is deliberately
//! loose (`<non-ws>@<non-ws>.<non-ws>`), not RFC 5322 validation; the
//! datastore and downstream mail delivery are the real arbiters.

/// Returns true iff the string looks like an email address.
///
/// Accepts `local@domain` where neither side contains whitespace or an
/// extra `@`, and the domain has a dot with at least one character on
/// each side.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || local.chars().any(char::is_whitespace)
        || domain.is_empty()
        || domain.contains('@')
        || domain.chars().any(char::is_whitespace)
    {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Returns true iff the lowercased input ends with `@gmail.com`.
pub fn is_gmail_address(email: &str) -> bool {
    email.to_lowercase().ends_with("@gmail.com")
}

/// Trims surrounding whitespace and strips `<` / `>` characters.
///
/// Blunts trivial markup injection in stored free text. Consumers still own
/// output encoding; this is not an HTML sanitizer.
pub fn sanitize_input(input: &str) -> String {
    input.trim().chars().filter(|c| *c != '<' && *c != '>').collect()
}
