pub mod account;
pub mod code_login;
pub mod password_reset;
pub mod profile;
pub mod token;
pub mod verification;
