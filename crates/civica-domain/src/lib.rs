//! Domain types shared across the civica dashboard
//!
//! This crate provides the canonical domain models for community issue
//! reporting:
//! - Issue: a reported neighborhood problem with category, status, and votes
//! - Comment: resident or official feedback attached to an issue
//! - User, UserSettings: the session account and its preferences
//! - Contact: municipal department directory entries
//! - Seed data: the built-in dataset used when no persisted state exists

pub mod comment;
pub mod contact;
pub mod issue;
pub mod seed;
pub mod user;
pub mod validation;

pub use comment::*;
pub use contact::*;
pub use issue::*;
pub use user::*;
pub use validation::*;
