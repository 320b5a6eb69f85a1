//! # Mock Session
//!
//! A self-declared role, standing in for a login. Nothing is verified: whoever calls
//! [`Session::login`] with [`Role::Admin`] is an admin. This only gates the admin flow of
//! the demo; exposing the catalog as a real service needs real authentication at the
//! boundary.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("not logged in")]
    NotAuthenticated,
    #[error("admin role required")]
    NotAdmin,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in as a mock user with the given role, replacing any current user.
    pub fn login(&mut self, role: Role) -> &User {
        let name = match role {
            Role::Admin => "Admin User",
            Role::Customer => "Valued Customer",
        };
        info!(%role, "Logged in");
        self.user.insert(User {
            id: "user-123".to_string(),
            name: name.to_string(),
            role,
            token: format!("fake-jwt-token-for-{role}"),
        })
    }

    pub fn logout(&mut self) {
        if self.user.take().is_some() {
            info!("Logged out");
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    pub fn require_admin(&self) -> Result<&User, SessionError> {
        match &self.user {
            None => Err(SessionError::NotAuthenticated),
            Some(user) if user.role == Role::Admin => Ok(user),
            Some(_) => Err(SessionError::NotAdmin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_login_grants_admin() {
        let mut session = Session::new();
        let user = session.login(Role::Admin).clone();
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.token, "fake-jwt-token-for-admin");
        assert!(session.is_admin());
        assert!(session.require_admin().is_ok());
    }

    #[test]
    fn customers_and_anonymous_users_are_not_admins() {
        let mut session = Session::new();
        assert_eq!(session.require_admin(), Err(SessionError::NotAuthenticated));

        session.login(Role::Customer);
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.require_admin(), Err(SessionError::NotAdmin));

        session.logout();
        assert!(!session.is_authenticated());
    }
}
