use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// Claims carried by the identity provider's bearer token.
///
/// The provider owns authentication entirely; this service only reads the
/// resolved subject and role list out of a verified token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Opaque subject id, also the local `users.id`.
    pub sub: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}

impl Claims {
    /// Instructor capability is granted by the provider's `instructor` or
    /// `admin` role.
    pub fn is_instructor(&self) -> bool {
        self.roles.iter().any(|r| r == "instructor" || r == "admin")
    }

    /// Local role to store on the synchronized user record.
    pub fn role(&self) -> Role {
        if self.is_instructor() {
            Role::Instructor
        } else {
            Role::Student
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
