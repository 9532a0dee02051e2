//! Selectable items and their categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ItemId, ValidationError};

/// Maximum length of an item title or price label.
pub const MAX_LABEL_LEN: usize = 200;

/// Maximum length of an item description.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// What kind of choice an item represents.
///
/// `Tier` and `Subscription` are mutually exclusive within their own category;
/// `Interest` items coexist freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// A website-build package from the pricing grid.
    Tier,

    /// An ongoing care/maintenance plan.
    Subscription,

    /// A free-standing service the visitor is interested in.
    Interest,
}

impl ItemCategory {
    /// Legacy id prefix for tier items.
    pub const TIER_PREFIX: &'static str = "tier-";

    /// Legacy id prefix for subscription items.
    pub const SUBSCRIPTION_PREFIX: &'static str = "subscription-";

    /// Derives a category from a prefixed id, for clients that omit it.
    pub fn infer_from_id(id: &ItemId) -> Self {
        let id = id.as_str();
        if id.starts_with(Self::TIER_PREFIX) {
            ItemCategory::Tier
        } else if id.starts_with(Self::SUBSCRIPTION_PREFIX) {
            ItemCategory::Subscription
        } else {
            ItemCategory::Interest
        }
    }

    /// True when at most one item of this category may be selected.
    pub fn is_exclusive(&self) -> bool {
        !matches!(self, ItemCategory::Interest)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Tier => "tier",
            ItemCategory::Subscription => "subscription",
            ItemCategory::Interest => "interest",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One thing a visitor can pick: a tier, a subscription, or a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableItem {
    pub id: ItemId,
    pub category: ItemCategory,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl SelectableItem {
    /// Creates an item, validating its title.
    pub fn new(
        id: ItemId,
        category: ItemCategory,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        check_len("title", &title, MAX_LABEL_LEN)?;
        Ok(Self {
            id,
            category,
            title,
            description: None,
            price: None,
        })
    }

    /// Shorthand for a tier item.
    pub fn tier(id: &str, title: &str) -> Result<Self, ValidationError> {
        Self::new(ItemId::new(id)?, ItemCategory::Tier, title)
    }

    /// Shorthand for a care-subscription item.
    pub fn subscription(id: &str, title: &str) -> Result<Self, ValidationError> {
        Self::new(ItemId::new(id)?, ItemCategory::Subscription, title)
    }

    /// Shorthand for an interest item.
    pub fn interest(id: &str, title: &str) -> Result<Self, ValidationError> {
        Self::new(ItemId::new(id)?, ItemCategory::Interest, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, ValidationError> {
        self.description = non_blank(description.into());
        if let Some(description) = &self.description {
            check_len("description", description, MAX_DESCRIPTION_LEN)?;
        }
        Ok(self)
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Result<Self, ValidationError> {
        self.price = non_blank(price.into());
        if let Some(price) = &self.price {
            check_len("price", price, MAX_LABEL_LEN)?;
        }
        Ok(self)
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::too_long(field, max, len));
    }
    Ok(())
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_category_from_legacy_prefixes() {
        let tier = ItemId::new("tier-plus").unwrap();
        let sub = ItemId::new("subscription-growth").unwrap();
        let seo = ItemId::new("seo-audit").unwrap();
        assert_eq!(ItemCategory::infer_from_id(&tier), ItemCategory::Tier);
        assert_eq!(ItemCategory::infer_from_id(&sub), ItemCategory::Subscription);
        assert_eq!(ItemCategory::infer_from_id(&seo), ItemCategory::Interest);
    }

    #[test]
    fn only_tier_and_subscription_are_exclusive() {
        assert!(ItemCategory::Tier.is_exclusive());
        assert!(ItemCategory::Subscription.is_exclusive());
        assert!(!ItemCategory::Interest.is_exclusive());
    }

    #[test]
    fn new_rejects_blank_title() {
        let id = ItemId::new("seo").unwrap();
        assert!(SelectableItem::new(id, ItemCategory::Interest, "  ").is_err());
    }

    #[test]
    fn new_rejects_overlong_title() {
        let id = ItemId::new("seo").unwrap();
        let title = "x".repeat(MAX_LABEL_LEN + 1);
        assert!(SelectableItem::new(id, ItemCategory::Interest, title).is_err());
    }

    #[test]
    fn blank_price_and_description_are_dropped() {
        let item = SelectableItem::tier("tier-plus", "Plus")
            .unwrap()
            .with_price(" ")
            .unwrap()
            .with_description("")
            .unwrap();
        assert!(item.price.is_none());
        assert!(item.description.is_none());
    }

    #[test]
    fn overlong_price_and_description_are_rejected() {
        let item = SelectableItem::tier("tier-plus", "Plus").unwrap();

        let price = item.clone().with_price("₩".repeat(MAX_LABEL_LEN + 1));
        assert!(matches!(price, Err(ValidationError::TooLong { .. })));

        let description = item.clone().with_description("x".repeat(MAX_DESCRIPTION_LEN + 1));
        assert!(matches!(description, Err(ValidationError::TooLong { .. })));

        assert!(item.with_price("₩".repeat(MAX_LABEL_LEN)).is_ok());
    }

    #[test]
    fn serializes_category_snake_case_and_skips_empty_options() {
        let item = SelectableItem::subscription("subscription-growth", "Growth Care").unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "subscription");
        assert!(json.get("price").is_none());
    }
}
