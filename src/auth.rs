//! Authentication Boundary
//!
//! Identity lives behind [`Authenticator`]. The bundled [`DemoAuthenticator`]
//! only validates the form input and hands out a session for anyone.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please enter your full name")]
    MissingName,
    #[error("Passwords don't match!")]
    PasswordMismatch,
    #[error("Please accept the Terms of Service and Privacy Policy")]
    TermsNotAccepted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }
}

#[async_trait(?Send)]
pub trait Authenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn register(&self, request: &SignupRequest) -> Result<Session, AuthError>;
}

/// Accepts any non-empty email/password pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthenticator;

impl DemoAuthenticator {
    /// "jane.doe@x.io" -> "Jane Doe"
    fn name_from_email(email: &str) -> String {
        let local = email.split('@').next().unwrap_or(email);
        local
            .split(['.', '_', '-'])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait(?Send)]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Session {
            email: email.to_string(),
            display_name: Self::name_from_email(email),
            started_at: Utc::now(),
        })
    }

    async fn register(&self, request: &SignupRequest) -> Result<Session, AuthError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }
        if request.password != request.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !request.accepted_terms {
            return Err(AuthError::TermsNotAccepted);
        }
        let mut session = self
            .authenticate(&Credentials {
                email: request.email.clone(),
                password: request.password.clone(),
            })
            .await?;
        session.display_name = name.to_string();
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupRequest {
        SignupRequest {
            name: "Sarah Wilson".to_string(),
            email: "sarah@example.com".to_string(),
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            accepted_terms: true,
        }
    }

    #[tokio::test]
    async fn test_any_non_empty_pair_is_accepted() {
        let session = DemoAuthenticator
            .authenticate(&Credentials {
                email: "john.doe@example.com".to_string(),
                password: "x".to_string(),
            })
            .await
            .expect("demo auth accepts non-empty credentials");
        assert_eq!(session.email, "john.doe@example.com");
        assert_eq!(session.display_name, "John Doe");
        assert_eq!(session.first_name(), "John");
    }

    #[tokio::test]
    async fn test_empty_fields_rejected() {
        for (email, password) in [("", "secret"), ("a@b.c", ""), ("   ", "secret")] {
            let result = DemoAuthenticator
                .authenticate(&Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await;
            assert_eq!(result, Err(AuthError::MissingCredentials));
        }
    }

    #[tokio::test]
    async fn test_register_validation_order() {
        let mut request = signup();
        request.confirm_password = "other".to_string();
        assert_eq!(
            DemoAuthenticator.register(&request).await,
            Err(AuthError::PasswordMismatch)
        );

        let mut request = signup();
        request.accepted_terms = false;
        assert_eq!(
            DemoAuthenticator.register(&request).await,
            Err(AuthError::TermsNotAccepted)
        );

        let mut request = signup();
        request.name = " ".to_string();
        assert_eq!(DemoAuthenticator.register(&request).await, Err(AuthError::MissingName));

        let mut request = signup();
        request.email.clear();
        assert_eq!(
            DemoAuthenticator.register(&request).await,
            Err(AuthError::MissingCredentials)
        );
    }

    #[tokio::test]
    async fn test_register_keeps_given_name() {
        let session = DemoAuthenticator.register(&signup()).await.unwrap();
        assert_eq!(session.display_name, "Sarah Wilson");
    }

    #[test]
    fn test_mismatch_message_matches_form_copy() {
        assert_eq!(AuthError::PasswordMismatch.to_string(), "Passwords don't match!");
    }
}
