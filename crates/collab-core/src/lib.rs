//! Service plumbing shared by every Collab service: env config loading, the common
//! error body, health checks, request-id/trace layers and tracing setup.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
