//! Agency Site - bilingual agency website backend
//!
//! This crate serves the English/Korean agency site: a locale router that
//! canonicalizes page URLs, and a selection coordinator that tracks the
//! tiers, care subscriptions and services a visitor picks before the
//! contact form opens.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
