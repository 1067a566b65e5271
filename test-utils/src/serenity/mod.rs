//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Role, User, Member) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Overview
//!
//! When testing code that interacts with Discord's API via Serenity, you often
//! need to create mock Serenity structs. These factories provide a consistent
//! way to create these objects with sensible defaults while allowing
//! customization of key fields.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::create_test_role_with_permissions` - Roles carrying a permission set
//! - `member::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `member::create_test_member_with_permissions` - Members carrying interaction permissions

pub mod member;
pub mod role;

// Re-export commonly used functions for convenience
pub use member::{create_test_member, create_test_member_with_permissions, create_test_user};
pub use role::{create_test_role, create_test_role_with_permissions};
