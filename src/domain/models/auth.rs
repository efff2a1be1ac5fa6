use serde::{Deserialize, Serialize};

/// Claims carried by the bearer token. `sub` is the user id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn is_main_admin(&self) -> bool {
        self.role == super::user::ROLE_MAIN_ADMIN
    }
}
