const REDACTED: &str = "[REDACTED]";

pub(crate) fn redact_secret(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }

    text.replace(secret, REDACTED)
}

pub(crate) fn authorization_for_log() -> String {
    format!("Authorization: OAuth {}", REDACTED)
}

#[cfg(test)]
mod tests {
    use super::{authorization_for_log, redact_secret};

    #[test]
    fn keeps_text_when_secret_is_empty() {
        assert_eq!(redact_secret("OAuth abc", ""), "OAuth abc");
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = redact_secret("token=y0_abc; again y0_abc", "y0_abc");
        assert_eq!(out, "token=[REDACTED]; again [REDACTED]");
    }

    #[test]
    fn header_never_carries_a_value() {
        assert_eq!(authorization_for_log(), "Authorization: OAuth [REDACTED]");
    }
}
