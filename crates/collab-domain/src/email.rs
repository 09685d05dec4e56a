//! Email address normalization.

/// Error returned for input that cannot be an email address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid email address")]
pub struct InvalidEmail;

/// Trim and lower-case an email address so lookups are case-insensitive.
///
/// Only a shape check: one `@` with a non-empty local part and domain. Deliverability
/// is proven by the verification code, not here.
pub fn normalize_email(raw: &str) -> Result<String, InvalidEmail> {
    let email = raw.trim().to_lowercase();
    let (local, domain) = email.split_once('@').ok_or(InvalidEmail)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || email.contains(' ') {
        return Err(InvalidEmail);
    }
    Ok(email)
}
