pub mod activities;
pub mod admin;
pub mod creators;
pub mod missions;
pub mod payments;
pub mod sample;
pub mod stats;
