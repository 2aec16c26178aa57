use crate::models::Identity;

/// Identity used when the launch parameter is absent or empty. The backend
/// scopes pairs, votes and rankings under this name like any other.
pub const DEFAULT_IDENTITY: &str = "default";

/// Derives the session identity from the launch parameter. Total: always
/// returns a usable identity, never an empty one.
pub fn resolve_identity(param: Option<&str>) -> Identity {
    match param {
        Some(name) if !name.trim().is_empty() => Identity::new(name.trim()),
        _ => Identity::new(DEFAULT_IDENTITY),
    }
}
