use std::fmt;

/// The address that gets the manager role on login.
pub const DEFAULT_MANAGER_EMAIL: &str = "hrmanager@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub role: Role,
}

/// Mock session. Login always succeeds and the password is ignored; the
/// role only shows up in the navbar and gates nothing. Not a security
/// boundary.
#[derive(Debug)]
pub struct Session {
    user: Option<User>,
    manager_email: String,
}

impl Session {
    pub fn new(manager_email: String) -> Self {
        Self {
            user: None,
            manager_email,
        }
    }

    pub fn login(&mut self, email: &str, _password: &str) {
        let role = if email == self.manager_email {
            Role::Manager
        } else {
            Role::User
        };
        self.user = Some(User {
            email: email.to_string(),
            role,
        });
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MANAGER_EMAIL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_email_gets_manager_role() {
        let mut session = Session::default();
        session.login(DEFAULT_MANAGER_EMAIL, "whatever");
        let user = session.user().unwrap();
        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.email, DEFAULT_MANAGER_EMAIL);
    }

    #[test]
    fn any_other_email_gets_user_role() {
        let mut session = Session::default();
        session.login("someone@example.com", "pw");
        assert_eq!(session.user().unwrap().role, Role::User);

        // Case-sensitive match, like the original.
        session.login("HRMANAGER@gmail.com", "pw");
        assert_eq!(session.user().unwrap().role, Role::User);
    }

    #[test]
    fn login_ignores_the_password_entirely() {
        let mut session = Session::default();
        session.login("a@b.c", "");
        assert!(session.is_logged_in());
    }

    #[test]
    fn logout_clears_the_flag() {
        let mut session = Session::default();
        session.login("a@b.c", "pw");
        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }

    #[test]
    fn overridden_manager_email_is_honored() {
        let mut session = Session::new("boss@corp.io".to_string());
        session.login("boss@corp.io", "pw");
        assert_eq!(session.user().unwrap().role, Role::Manager);
        session.login(DEFAULT_MANAGER_EMAIL, "pw");
        assert_eq!(session.user().unwrap().role, Role::User);
    }
}
