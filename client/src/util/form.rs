//! Input checks shared by the login, registration, and waitlist forms.
//!
//! These are presence/shape checks only; the backend remains the authority on
//! whether an address or password is acceptable.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose `local@domain.tld` shape check.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Trim `raw` and return `None` when nothing is left.
#[must_use]
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
