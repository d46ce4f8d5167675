//! ==============================================================================
//! model.rs - application state tree
//! ==============================================================================
//!
//! two independent slices combined by key. the store owns the tree;
//! views only ever see clones or borrows of it.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

/// name shown for a session that has not logged in
pub const GUEST_NAME: &str = "Guest";

// ==============================================================================
// records
// ==============================================================================

/// an uploaded menu as retained by the application
///
/// only the filename is kept, never the file content. records are never
/// mutated once they are in the menu sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub name: String,
    pub file: String,
}

impl MenuRecord {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// menu object returned by `GET /api/menus`
///
/// the backend schema is not owned here, so unknown fields are ignored
/// and everything except the name is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMenu {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ==============================================================================
// slices
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    /// None until a login succeeds
    pub username: Option<String>,
}

impl UserState {
    /// username for display, falling back to the guest name
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(GUEST_NAME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    /// insertion ordered, append only
    pub menus: Vec<MenuRecord>,
}

/// root of the state tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub user: UserState,
    pub menu: MenuState,
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = AppState::default();
        assert_eq!(state.user.username, None);
        assert!(state.menu.menus.is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_guest() {
        let mut user = UserState::default();
        assert_eq!(user.display_name(), "Guest");

        user.username = Some("alice".to_string());
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn test_remote_menu_ignores_unknown_fields() {
        let json = r#"[{"id": 4, "name": "Burger", "description": "beef", "price": "9.99"}, {"name": "Soup"}]"#;
        let menus: Vec<RemoteMenu> = serde_json::from_str(json).unwrap();

        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].description.as_deref(), Some("beef"));
        assert_eq!(menus[1].description, None);
    }
}
