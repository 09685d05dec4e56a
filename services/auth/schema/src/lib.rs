//! sea-orm entities owned by the auth service.

pub mod users;
pub mod verification_codes;
