use crate::domain::entities::{NewUser, User};
use crate::domain::errors::AuthError;
use crate::domain::ports::{Clock, CredentialHasher, StoreError, UserStore};
use crate::interface_adapters::protocol::CredentialsRequest;

const MIN_PASSWORD_LEN: usize = 8;

// Sign-up use case with injected dependencies.
pub struct SignUpUseCase<C, S, H> {
    pub clock: C,
    pub store: S,
    pub hasher: H,
}

impl<C, S, H> SignUpUseCase<C, S, H>
where
    C: Clock,
    S: UserStore,
    H: CredentialHasher,
{
    pub async fn execute(&self, payload: CredentialsRequest) -> Result<User, AuthError> {
        let email = normalize_email(&payload.email)?;
        if payload.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let password_hash = self
            .hasher
            .hash(&payload.password)
            .await
            .map_err(|_| AuthError::HashFailure)?;

        let user = NewUser {
            email: email.clone(),
            password_hash,
            created_at: self.clock.now(),
        };

        self.store.insert(user).await.map_err(|err| match err {
            StoreError::Conflict => AuthError::EmailTaken(email),
            StoreError::Backend(_) => AuthError::StorageFailure,
        })
    }
}

// Emails are compared case-insensitively, so they are stored lowercased.
fn normalize_email(value: &str) -> Result<String, AuthError> {
    let email = value.trim().to_lowercase();

    let Some((local, domain)) = email.split_once('@') else {
        return Err(AuthError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AuthError::InvalidEmail);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(AuthError::InvalidEmail);
    }

    Ok(email)
}
