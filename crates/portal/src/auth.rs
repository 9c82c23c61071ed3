//! Demo authentication.
//!
//! Credentials are fixed constants compared in process. This gates which
//! screen a user sees; it is not a security boundary.

use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

pub const DEMO_HR_EMAIL: &str = "hr@demo.com";
pub const DEMO_STUDENT_EMAIL: &str = "student@demo.com";
pub const DEMO_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Hr,
}

impl UserType {
    fn display_name(self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Hr => "HR",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Student => f.write_str("student"),
            UserType::Hr => f.write_str("hr"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// The signed-in user and which experience they get
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: User,
    pub user_type: UserType,
}

impl Session {
    pub fn is_hr(&self) -> bool {
        self.user_type == UserType::Hr
    }
}

/// Sign in.
///
/// The two demo accounts map to their fixed user types when given the demo
/// password. Any other non-empty email and password, a demo email with a
/// different password included, signs in as a new student account.
pub fn login(email: &str, password: &str) -> Result<Session> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(PortalError::InvalidCredentials);
    }

    let session = match (email, password) {
        (DEMO_HR_EMAIL, DEMO_PASSWORD) => demo_session("hr-demo", email, UserType::Hr),
        (DEMO_STUDENT_EMAIL, DEMO_PASSWORD) => demo_session("student-demo", email, UserType::Student),
        _ => Session {
            user: User {
                uid: account_uid(email),
                email: email.to_string(),
                display_name: "User".to_string(),
            },
            user_type: UserType::Student,
        },
    };

    info!("Signed in {} as {}", session.user.email, session.user_type);
    Ok(session)
}

/// Sign out, ending the session
pub fn logout(session: Session) {
    info!("Signed out {} ({})", session.user.email, session.user_type);
}

/// Create an account of the given type and sign in as it
pub fn signup(email: &str, password: &str, user_type: UserType) -> Result<Session> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(PortalError::InvalidCredentials);
    }

    Ok(Session {
        user: User {
            uid: account_uid(email),
            email: email.to_string(),
            display_name: user_type.display_name().to_string(),
        },
        user_type,
    })
}

fn demo_session(uid: &str, email: &str, user_type: UserType) -> Session {
    Session {
        user: User {
            uid: uid.to_string(),
            email: email.to_string(),
            display_name: user_type.display_name().to_string(),
        },
        user_type,
    }
}

/// Stable uid derived from the email so that persisted data follows the account
fn account_uid(email: &str) -> String {
    let slug: String = email
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("user-{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_hr_login() {
        let session = login("hr@demo.com", "password123").unwrap();
        assert_eq!(session.user_type, UserType::Hr);
        assert_eq!(session.user.uid, "hr-demo");
        assert!(session.is_hr());
    }

    #[test]
    fn test_demo_student_login() {
        let session = login("student@demo.com", "password123").unwrap();
        assert_eq!(session.user_type, UserType::Student);
        assert_eq!(session.user.display_name, "Student");
    }

    #[test]
    fn test_demo_email_with_other_password_is_a_new_student() {
        let session = login("hr@demo.com", "wrong").unwrap();
        assert_eq!(session.user_type, UserType::Student);
        assert_eq!(session.user.uid, "user-hr-demo-com");
        assert_eq!(session.user.display_name, "User");
        assert!(!session.is_hr());
    }

    #[test]
    fn test_logout_consumes_session() {
        let session = login("student@demo.com", "password123").unwrap();
        logout(session);
    }

    #[test]
    fn test_other_credentials_become_student() {
        let session = login("Someone@Example.com", "secret").unwrap();
        assert_eq!(session.user_type, UserType::Student);
        assert_eq!(session.user.display_name, "User");
        assert_eq!(session.user.uid, "user-someone-example-com");
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(login("", "password123").is_err());
        assert!(login("a@b.com", "").is_err());
    }

    #[test]
    fn test_signup_hr() {
        let session = signup("recruiter@corp.com", "pw", UserType::Hr).unwrap();
        assert!(session.is_hr());
        assert_eq!(session.user.display_name, "HR");
    }
}
