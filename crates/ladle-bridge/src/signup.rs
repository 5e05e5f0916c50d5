//! Sign-up form payload and its client-side validation rules.

/// What the signup form submits to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub fullname: String,
}

/// How a sign-up attempt ended. `UsernameTaken` comes from the pre-insert
/// existence check, not from a database error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    Success,
    UsernameTaken,
    Failed(String),
}

/// Which of the password requirements the current input satisfies. The form
/// shows these live as a checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordRules {
    pub length: bool,
    pub upper: bool,
    pub lower: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordRules {
    pub fn ok(&self) -> bool {
        self.length && self.upper && self.lower && self.number && self.special
    }
}

pub fn evaluate_password(password: &str) -> PasswordRules {
    PasswordRules {
        length: password.chars().count() >= 8,
        upper: password.chars().any(|c| c.is_ascii_uppercase()),
        lower: password.chars().any(|c| c.is_ascii_lowercase()),
        number: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    }
}

/// Lightweight shape check: `local@domain.tld` with a tld of at least two
/// characters and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.chars().count() >= 2,
        None => false,
    }
}

impl SignUpRequest {
    /// Mirrors the submit-button gate: valid email, all password rules, and
    /// a non-empty username.
    pub fn is_submittable(&self) -> bool {
        is_valid_email(&self.email)
            && evaluate_password(&self.password).ok()
            && !self.username.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_is_enforced() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@.io"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@example.c"));
    }

    #[test]
    fn all_password_rules_must_hold() {
        assert!(!evaluate_password("short1!").ok());
        assert!(!evaluate_password("alllowercase1!").ok());
        assert!(!evaluate_password("ALLUPPERCASE1!").ok());
        assert!(!evaluate_password("NoDigitsHere!").ok());
        assert!(!evaluate_password("NoSpecials123").ok());
        assert!(evaluate_password("StrongPass!123").ok());
    }

    #[test]
    fn submittable_requires_a_username() {
        let mut request = SignUpRequest {
            email: "jane@example.com".to_owned(),
            password: "StrongPass!123".to_owned(),
            username: "  ".to_owned(),
            fullname: String::new(),
        };
        assert!(!request.is_submittable());
        request.username = "jane".to_owned();
        assert!(request.is_submittable());
    }
}
