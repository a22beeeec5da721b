//! Session types exchanged with the hosted auth service.

use serde::{Deserialize, Serialize};

/// Signed-in account as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Auth user id; profile rows share it.
    pub id: String,
    /// Login email, when the service returns it.
    #[serde(default)]
    pub email: Option<String>,
}

/// Current session: the user plus the bearer token for row-level access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for row-level access.
    pub access_token: String,
    /// Kept with the stored session; not used for renewal.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds; `None` when the service did not say.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Account the token belongs to.
    pub user: AuthUser,
}

impl Session {
    /// A session without an expiry is treated as still valid.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}

/// Body of `POST /auth/v1/token?grant_type=password`.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordCredentials {
    /// Account email.
    pub email: String,
    /// Plain password, sent over TLS.
    pub password: String,
}

/// Metadata attached to a new account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupMetadata {
    /// Public handle, copied into the profile row.
    pub username: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Body of `POST /auth/v1/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Stored as user metadata by the auth service.
    pub data: SignupMetadata,
}

/// Token grant response. Signup returns the same shape when no email
/// confirmation is required, otherwise only the user fields.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Absent while email confirmation is pending.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Refresh token, if issued.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Absolute expiry in unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Account the grant is for.
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl TokenResponse {
    /// Turn a grant into a session. `None` when the service withheld the
    /// token (e.g. pending email confirmation).
    pub fn into_session(self, now_secs: i64) -> Option<Session> {
        let access_token = self.access_token.filter(|t| !t.is_empty())?;
        let user = self.user?;
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_secs + secs));
        Some(Session {
            access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user,
        })
    }
}

/// Error body returned by the auth service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthErrorBody {
    /// Set by token grants.
    #[serde(default)]
    pub error_description: Option<String>,
    /// Set by signup and most other endpoints.
    #[serde(default)]
    pub msg: Option<String>,
    /// Fallback field used by some error paths.
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthErrorBody {
    /// First non-blank message field, in the order the auth service fills them.
    pub fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_derives_expiry_from_expires_in() {
        let raw = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": {"id": "user-1", "email": "ada@example.com", "role": "authenticated"}
        }"#;
        let response: TokenResponse = serde_json::from_str(raw).expect("decode token");
        let session = response.into_session(1_000).expect("session");
        assert_eq!(session.expires_at, Some(4_600));
        assert_eq!(session.user.id, "user-1");
        assert!(!session.is_expired(4_599));
        assert!(session.is_expired(4_600));
    }

    #[test]
    fn signup_without_token_yields_no_session() {
        let raw = r#"{"user": {"id": "user-2"}}"#;
        let response: TokenResponse = serde_json::from_str(raw).expect("decode signup");
        assert!(response.into_session(0).is_none());
    }

    #[test]
    fn auth_error_prefers_description() {
        let body: AuthErrorBody = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        )
        .expect("decode error");
        assert_eq!(body.into_message().as_deref(), Some("Invalid login credentials"));
    }
}
