//! Privileged role tags.
//!
//! Roles are stored as `user_type` rows; only the two privileged names carry meaning in
//! business rules. Every other role name (such as `user`) only grants what its permission
//! rows allow.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
        }
    }

    /// Maps a stored role name to its tag, `None` for unprivileged roles.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn maps_known_names() {
        assert_eq!(Role::from_name("admin"), Some(Role::Admin));
        assert_eq!(Role::from_name("manager"), Some(Role::Manager));
        assert_eq!(Role::from_name("user"), None);
        assert_eq!(Role::from_name("Admin"), None);
    }

    #[test]
    fn name_round_trips() {
        for role in [Role::Admin, Role::Manager] {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
        }
    }
}
