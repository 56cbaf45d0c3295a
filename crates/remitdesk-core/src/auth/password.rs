//! Password policy.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_LENGTH: usize = 8;

static SPECIAL_CHAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("special character pattern is valid")
});

/// One rule of the policy and whether a candidate meets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequirement {
    pub label: &'static str,
    pub met: bool,
}

/// Evaluates every rule against `password`, in display order.
pub fn password_requirements(password: &str) -> Vec<PasswordRequirement> {
    vec![
        PasswordRequirement {
            label: "At least 8 characters",
            met: password.chars().count() >= MIN_LENGTH,
        },
        PasswordRequirement {
            label: "At least one uppercase letter",
            met: password.chars().any(|c| c.is_ascii_uppercase()),
        },
        PasswordRequirement {
            label: "At least one lowercase letter",
            met: password.chars().any(|c| c.is_ascii_lowercase()),
        },
        PasswordRequirement {
            label: "At least one number",
            met: password.chars().any(|c| c.is_ascii_digit()),
        },
        PasswordRequirement {
            label: "At least one special character (!@#$%^&*)",
            met: SPECIAL_CHAR.is_match(password),
        },
    ]
}

pub fn is_password_valid(password: &str) -> bool {
    password_requirements(password).iter().all(|r| r.met)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_meets_every_rule() {
        assert!(is_password_valid("Naira2Cad!"));
    }

    #[test]
    fn test_reports_unmet_rules() {
        let unmet: Vec<_> = password_requirements("short")
            .into_iter()
            .filter(|r| !r.met)
            .map(|r| r.label)
            .collect();
        assert_eq!(
            unmet,
            vec![
                "At least 8 characters",
                "At least one uppercase letter",
                "At least one number",
                "At least one special character (!@#$%^&*)",
            ]
        );
    }

    #[test]
    fn test_underscore_is_not_special() {
        assert!(!is_password_valid("Password1_"));
    }
}
