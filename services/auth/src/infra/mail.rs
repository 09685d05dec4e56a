use chrono::{DateTime, Utc};
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::domain::repository::Mailer;
use crate::domain::types::CodePurpose;
use crate::error::MailError;

fn subject(purpose: CodePurpose) -> &'static str {
    match purpose {
        CodePurpose::Login => "Your Collab sign-in code",
        CodePurpose::PasswordReset => "Your Collab password reset code",
    }
}

fn body(code: &str, purpose: CodePurpose, expires_at: DateTime<Utc>) -> String {
    let action = match purpose {
        CodePurpose::Login => "sign in to Collab",
        CodePurpose::PasswordReset => "reset your Collab password",
    };
    format!(
        "Use the code {code} to {action}.\n\n\
         The code expires at {} UTC. If you did not request it, you can ignore this email.\n",
        expires_at.format("%Y-%m-%d %H:%M")
    )
}

/// Sends codes over SMTP with STARTTLS.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        port: u16,
        credentials: Option<(String, String)>,
        from: &str,
    ) -> Result<Self, MailError> {
        let from: Mailbox = from
            .parse()
            .map_err(|e| MailError::Address(format!("{from}: {e}")))?;
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailError::Transport(format!("smtp relay {host}: {e}")))?
            .port(port);
        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        purpose: CodePurpose,
        expires_at: DateTime<Utc>,
    ) -> Result<(), MailError> {
        let to: Mailbox = email
            .parse()
            .map_err(|e| MailError::Address(format!("{email}: {e}")))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject(purpose))
            .header(ContentType::TEXT_PLAIN)
            .body(body(code, purpose, expires_at))
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Writes codes to the log instead of sending them. Development only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        purpose: CodePurpose,
        expires_at: DateTime<Utc>,
    ) -> Result<(), MailError> {
        info!(
            to = email,
            subject = subject(purpose),
            code,
            expires_at = %expires_at,
            "verification code email (log transport)"
        );
        Ok(())
    }
}

/// The mailer chosen at startup.
#[derive(Clone)]
pub enum AppMailer {
    Smtp(SmtpMailer),
    Log(LogMailer),
}

impl Mailer for AppMailer {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        purpose: CodePurpose,
        expires_at: DateTime<Utc>,
    ) -> Result<(), MailError> {
        match self {
            Self::Smtp(m) => m.send_verification_code(email, code, purpose, expires_at).await,
            Self::Log(m) => m.send_verification_code(email, code, purpose, expires_at).await,
        }
    }
}
