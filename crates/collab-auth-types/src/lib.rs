//! Session types shared across Collab services.
//!
//! Provides JWT validation, session cookie builders, and the `IdentityHeaders` extractor.

pub mod cookie;
pub mod identity;
pub mod token;
