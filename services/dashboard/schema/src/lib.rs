//! sea-orm entities owned by the dashboard service.

pub mod activities;
pub mod creators;
pub mod missions;
pub mod payments;
