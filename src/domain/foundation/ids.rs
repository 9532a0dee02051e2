//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifies one visitor's browsing session (and therefore one selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorSessionId(Uuid);

impl VisitorSessionId {
    /// Creates a new random VisitorSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a VisitorSessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VisitorSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VisitorSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VisitorSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Single-use token naming a stashed selection snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandoffToken(Uuid);

impl HandoffToken {
    /// Creates a new random HandoffToken.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for HandoffToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HandoffToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HandoffToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of a selectable item (e.g. `tier-plus`, `seo-audit`).
///
/// Unique within a selection set. Never empty, at most
/// [`ItemId::MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub const MAX_LEN: usize = 100;

    /// Creates a new ItemId, returning error if blank or too long.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("item_id"));
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::too_long("item_id", Self::MAX_LEN, len));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visitor_session_id_roundtrips_through_string() {
        let id = VisitorSessionId::new();
        let parsed: VisitorSessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn visitor_session_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<VisitorSessionId>().is_err());
    }

    #[test]
    fn handoff_tokens_are_unique() {
        assert_ne!(HandoffToken::new(), HandoffToken::new());
    }

    #[test]
    fn item_id_rejects_blank() {
        assert!(ItemId::new("").is_err());
        assert!(ItemId::new("   ").is_err());
    }

    #[test]
    fn item_id_rejects_overlong() {
        assert!(ItemId::new("x".repeat(ItemId::MAX_LEN)).is_ok());
        assert!(matches!(
            ItemId::new("x".repeat(ItemId::MAX_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn item_id_trims_whitespace() {
        let id = ItemId::new("  tier-plus ").unwrap();
        assert_eq!(id.as_str(), "tier-plus");
    }

    #[test]
    fn item_id_deserialization_validates() {
        let ok: ItemId = serde_json::from_str("\"seo-audit\"").unwrap();
        assert_eq!(ok.as_str(), "seo-audit");
        assert!(serde_json::from_str::<ItemId>("\"\"").is_err());
    }
}
