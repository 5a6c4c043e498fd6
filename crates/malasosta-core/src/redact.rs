/// Mask the local part of an email address for log output.
///
/// Keeps the first character and the domain: `someone@example.com` becomes
/// `s***@example.com`. Strings without an `@` are masked entirely, so the
/// helper is safe to call on unvalidated input.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => format!("***@{domain}"),
        },
        None => "***".to_owned(),
    }
}
