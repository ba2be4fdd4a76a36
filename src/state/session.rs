//! Persisted Session Slot
//!
//! The session survives reloads in `localStorage` under three keys:
//! `token`, `username`, and the `isAdmin` flag. Writers always
//! overwrite or clear the whole slot.

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const IS_ADMIN_KEY: &str = "isAdmin";

/// Which login path issued the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Persisted representation of the admin flag.
    pub fn flag(&self) -> &'static str {
        match self {
            Role::Admin => "true",
            Role::User => "false",
        }
    }

    /// Anything other than the literal `"true"` is a user session.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "true" {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// An established session, as read from or written to storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session, if a token is present.
pub fn load() -> Option<Session> {
    let storage = storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let username = storage
        .get_item(USERNAME_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    let role = storage
        .get_item(IS_ADMIN_KEY)
        .ok()
        .flatten()
        .map(|flag| Role::from_flag(&flag))
        .unwrap_or(Role::User);
    Some(Session {
        token,
        username,
        role,
    })
}

/// Persist a freshly issued session, replacing whatever was stored.
pub fn store(session: &Session) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(USERNAME_KEY, &session.username);
        let _ = storage.set_item(IS_ADMIN_KEY, session.role.flag());
    }
}

/// Remove all three persisted keys.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
        let _ = storage.remove_item(IS_ADMIN_KEY);
    }
}

/// The bearer token attached to outbound requests, when present.
pub fn token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Tear the session down completely: clear the slot and force a full
/// reload at the entry URL. Used by logout and by the gateway when the
/// server rejects the token.
pub fn terminate() {
    clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_flag_round_trip() {
        assert_eq!(Role::from_flag(Role::Admin.flag()), Role::Admin);
        assert_eq!(Role::from_flag(Role::User.flag()), Role::User);
    }

    #[test]
    fn test_unknown_flag_is_user() {
        assert_eq!(Role::from_flag(""), Role::User);
        assert_eq!(Role::from_flag("yes"), Role::User);
        assert_eq!(Role::from_flag("TRUE"), Role::User);
    }
}
