//! Domain layer containing the site's business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, events, errors)
//! - `locale` - Supported locales and the request-path locale router
//! - `selection` - Selected items, exclusivity rules and gating
//! - `contact` - The gated contact request and its email summary

pub mod contact;
pub mod foundation;
pub mod locale;
pub mod selection;
