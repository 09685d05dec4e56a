use uuid::Uuid;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, ProfileUpdate};
use crate::error::AuthServiceError;

pub struct GetProfileUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> GetProfileUseCase<A> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Account, AuthServiceError> {
        self.accounts
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}

pub struct CompleteProfileUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> CompleteProfileUseCase<A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Account, AuthServiceError> {
        if !update.is_complete() {
            return Err(AuthServiceError::MissingData);
        }
        let update = ProfileUpdate {
            display_name: update
                .display_name
                .map(|n| n.trim().to_owned())
                .filter(|n| !n.is_empty()),
            first_name: update.first_name.trim().to_owned(),
            last_name: update.last_name.trim().to_owned(),
            phone_number: update.phone_number.trim().to_owned(),
            address: update.address.trim().to_owned(),
            location: update.location.trim().to_owned(),
        };

        if self.accounts.find_by_id(user_id).await?.is_none() {
            return Err(AuthServiceError::UserNotFound);
        }
        self.accounts.complete_profile(user_id, &update).await?;

        self.accounts
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}
