//! Masking helpers so emails and usernames never land in logs verbatim.

/// Mask an email address for logging: first three characters of the local
/// part, then asterisks, then the domain unchanged.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let prefix: String = email[..at_pos].chars().take(3).collect();
            format!("{}***{}", prefix, &email[at_pos..])
        }
        None => {
            // Not shaped like an email; mask all but a short prefix anyway.
            let prefix: String = email.chars().take(3).collect();
            format!("{}***", prefix)
        }
    }
}

/// Mask a username for logging, keeping only a short prefix.
pub fn mask_username(username: &str) -> String {
    let prefix: String = username.chars().take(3).collect();
    format!("{}***", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "ali***@example.com");
        assert_eq!(mask_email("ab@example.com"), "ab***@example.com");
    }

    #[test]
    fn test_mask_email_without_at_sign() {
        assert_eq!(mask_email("notanemail"), "not***");
    }

    #[test]
    fn test_mask_username() {
        assert_eq!(mask_username("padthai_fan"), "pad***");
        assert_eq!(mask_username("ab"), "ab***");
    }
}
