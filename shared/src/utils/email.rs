//! Email address helpers
//!
//! No format validation happens here: an address is accepted as long as it is
//! present. The masking helper keeps raw addresses out of log lines.

/// Returns the address if it is present and not blank.
pub fn non_blank(email: Option<&str>) -> Option<&str> {
    email.filter(|e| !e.trim().is_empty())
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the whole domain.
///
/// # Example
///
/// ```
/// use fz_shared::email::mask_email;
///
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => {
            let first: String = email.chars().take(1).collect();
            format!("{}***", first)
        }
    }
}
