use serde::Deserialize;

use collab_core::config::Config;

/// Where verification-code emails go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailTransport {
    /// Write the message to the log instead of sending it. Development only.
    Log,
    Smtp,
}

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access and refresh tokens.
    pub jwt_secret: String,
    /// Cookie domain attribute (root domain, e.g. "example.com").
    pub cookie_domain: String,
    /// TCP port to listen on. Env var: `AUTH_PORT`.
    #[serde(default = "default_auth_port")]
    pub auth_port: u16,
    /// Echo issued codes in HTTP responses. Never enable in production.
    #[serde(default)]
    pub expose_codes: bool,
    #[serde(default = "default_mail_transport")]
    pub mail_transport: MailTransport,
    pub smtp_host: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    /// `From` header, e.g. `"Collab <no-reply@collab.example>"`.
    #[serde(default = "default_mail_from")]
    pub mail_from: String,
    /// OAuth client id that Google ID tokens must be issued for. Google sign-in is
    /// disabled when unset.
    pub google_client_id: Option<String>,
}

impl Config for AuthConfig {}

fn default_auth_port() -> u16 {
    3112
}

fn default_mail_transport() -> MailTransport {
    MailTransport::Log
}

fn default_smtp_port() -> u16 {
    587
}

fn default_mail_from() -> String {
    "Collab <no-reply@collab.local>".to_owned()
}
