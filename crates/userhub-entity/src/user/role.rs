//! User role defaults.
//!
//! Roles are free-form strings; the store does not constrain them.

/// Role assigned when a create or update request omits one.
pub const DEFAULT_ROLE: &str = "user";

/// Resolve an optional requested role to the stored value.
pub fn role_or_default(role: Option<String>) -> String {
    role.unwrap_or_else(|| DEFAULT_ROLE.to_string())
}
