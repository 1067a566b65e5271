//! Resultboard Test Utils
//!
//! Provides shared testing utilities for building unit tests for the resultboard
//! bot. This crate offers factory functions that create Serenity model objects
//! (roles, users, guild members) the same way Discord's API would return them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! let role = create_test_role(111, "Fighters", 0xFF0000, 5);
//! let member = create_test_member(42, "player_one", Some("Player One"), &[111], false);
//! ```

pub mod serenity;
