use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::domain::ports::{CredentialHasher, UserStore};
use crate::interface_adapters::protocol::CredentialsRequest;

// Validates a user's credentials and returns the matching account.
pub struct SignInUseCase<S, H> {
    pub store: S,
    pub hasher: H,
}

impl<S, H> SignInUseCase<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    pub async fn execute(&self, payload: CredentialsRequest) -> Result<User, AuthError> {
        let email = payload.email.trim().to_lowercase();

        let user = self
            .store
            .find_by_email(&email)
            .await
            .map_err(|_| AuthError::StorageFailure)?
            .ok_or_else(|| AuthError::UserNotFound(email.clone()))?;

        let valid = self
            .hasher
            .verify(&payload.password, &user.password_hash)
            .await
            .map_err(|_| AuthError::HashFailure)?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}
