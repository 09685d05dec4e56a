use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbBackend, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr, Statement,
    TransactionTrait,
};
use uuid::Uuid;

use collab_auth_schema::{users, verification_codes};
use collab_domain::user::{AuthProvider, UserRole};

use crate::domain::repository::{AccountRepository, VerificationCodeRepository};
use crate::domain::types::{Account, ProfileUpdate, VerificationCode};
use crate::error::AuthServiceError;

// ── VerificationCode repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVerificationCodeRepository {
    pub db: DatabaseConnection,
}

impl VerificationCodeRepository for DbVerificationCodeRepository {
    async fn replace_for_email(&self, code: &VerificationCode) -> Result<u64, AuthServiceError> {
        let removed = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                let code = code.clone();
                Box::pin(async move {
                    // Serializes concurrent issuance for one address until commit.
                    txn.execute(Statement::from_sql_and_values(
                        DbBackend::Postgres,
                        "SELECT pg_advisory_xact_lock(hashtext($1))",
                        [code.email.clone().into()],
                    ))
                    .await?;

                    let removed = verification_codes::Entity::delete_many()
                        .filter(verification_codes::Column::Email.eq(code.email.as_str()))
                        .exec(txn)
                        .await?
                        .rows_affected;

                    verification_codes::ActiveModel {
                        id: Set(code.id),
                        email: Set(code.email),
                        code: Set(code.code),
                        created_at: Set(code.created_at),
                        expires_at: Set(code.expires_at),
                        used: Set(false),
                    }
                    .insert(txn)
                    .await?;
                    Ok(removed)
                })
            })
            .await
            .context("replace verification code")?;
        Ok(removed)
    }

    async fn find_unused(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<VerificationCode>, AuthServiceError> {
        let models = verification_codes::Entity::find()
            .filter(verification_codes::Column::Email.eq(email))
            .filter(verification_codes::Column::Code.eq(code))
            .filter(verification_codes::Column::Used.eq(false))
            .order_by_asc(verification_codes::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("find unused verification codes")?;
        Ok(models.into_iter().map(code_from_model).collect())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let result = verification_codes::Entity::update_many()
            .col_expr(verification_codes::Column::Used, Expr::value(true))
            .filter(verification_codes::Column::Id.eq(id))
            .filter(verification_codes::Column::Used.eq(false))
            .exec(&self.db)
            .await
            .context("mark verification code used")?;
        Ok(result.rows_affected == 1)
    }
}

fn code_from_model(model: verification_codes::Model) -> VerificationCode {
    VerificationCode {
        id: model.id,
        email: model.email,
        code: model.code,
        created_at: model.created_at,
        expires_at: model.expires_at,
        used: model.used,
    }
}

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        model.map(account_from_model).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")?;
        model.map(account_from_model).transpose()
    }

    async fn create(&self, account: &Account) -> Result<(), AuthServiceError> {
        let result = users::ActiveModel {
            id: Set(account.id),
            email: Set(account.email.clone()),
            display_name: Set(account.display_name.clone()),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            phone_number: Set(account.phone_number.clone()),
            address: Set(account.address.clone()),
            location: Set(account.location.clone()),
            photo_url: Set(account.photo_url.clone()),
            profile_complete: Set(account.profile_complete),
            auth_provider: Set(account.auth_provider.as_str().to_owned()),
            password_hash: Set(account.password_hash.clone()),
            role: Set(i16::from(account.role.as_u8())),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthServiceError::UserAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create account").into()),
        }
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            password_hash: Set(Some(password_hash.to_owned())),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update password hash")?;
        Ok(())
    }

    async fn link_google(&self, id: Uuid) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            auth_provider: Set(AuthProvider::Google.as_str().to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("link google sign-in")?;
        Ok(())
    }

    async fn complete_profile(
        &self,
        id: Uuid,
        profile: &ProfileUpdate,
    ) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            display_name: profile.display_name.clone().map_or(NotSet, Set),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            phone_number: Set(profile.phone_number.clone()),
            address: Set(profile.address.clone()),
            location: Set(profile.location.clone()),
            profile_complete: Set(true),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("complete profile")?;
        Ok(())
    }
}

fn account_from_model(model: users::Model) -> Result<Account, AuthServiceError> {
    let auth_provider = AuthProvider::parse(&model.auth_provider)
        .ok_or_else(|| anyhow!("unknown auth provider {:?}", model.auth_provider))?;
    let role = u8::try_from(model.role)
        .ok()
        .and_then(UserRole::from_u8)
        .ok_or_else(|| anyhow!("unknown role {}", model.role))?;
    Ok(Account {
        id: model.id,
        email: model.email,
        display_name: model.display_name,
        first_name: model.first_name,
        last_name: model.last_name,
        phone_number: model.phone_number,
        address: model.address,
        location: model.location,
        photo_url: model.photo_url,
        profile_complete: model.profile_complete,
        auth_provider,
        password_hash: model.password_hash,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
