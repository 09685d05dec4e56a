use anyhow::Context as _;
use sea_orm::Database;
use tracing::{info, warn};

use collab_auth::config::{AuthConfig, MailTransport};
use collab_auth::infra::google::GoogleTokenInfoClient;
use collab_auth::infra::mail::{AppMailer, LogMailer, SmtpMailer};
use collab_auth::router::build_router;
use collab_auth::state::AppState;
use collab_core::config::Config;
use collab_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AuthConfig::try_from_env().context("load auth config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let mailer = match config.mail_transport {
        MailTransport::Smtp => {
            let host = config
                .smtp_host
                .as_deref()
                .context("SMTP_HOST is required when MAIL_TRANSPORT=smtp")?;
            let credentials = config.smtp_username.clone().zip(config.smtp_password.clone());
            AppMailer::Smtp(
                SmtpMailer::new(host, config.smtp_port, credentials, &config.mail_from)
                    .context("build smtp mailer")?,
            )
        }
        MailTransport::Log => {
            warn!("MAIL_TRANSPORT=log: verification codes are written to the log, not emailed");
            AppMailer::Log(LogMailer)
        }
    };

    let google = match config.google_client_id.clone() {
        Some(client_id) => {
            Some(GoogleTokenInfoClient::new(client_id).context("build google http client")?)
        }
        None => {
            info!("GOOGLE_CLIENT_ID not set: google sign-in disabled");
            None
        }
    };

    if config.expose_codes {
        warn!("EXPOSE_CODES=true: issued codes are echoed in responses");
    }

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
        expose_codes: config.expose_codes,
        mailer,
        google,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
