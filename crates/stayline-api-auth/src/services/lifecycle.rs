//! Session lifecycle state.
//!
//! The per-user state machine is not stored anywhere; it is implied by the
//! expiry timestamps on the user and session rows. This module makes it
//! explicit so the transitions are checked in one place.

use stayline_db::{SessionRecord, User};

/// Computed authentication state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No live session: signed out or never signed in.
    Anonymous,
    /// API key (and session, where known) inside their validity windows.
    Authenticated,
    /// API-key or refresh-token validity window has elapsed.
    Expired,
}

impl SessionState {
    /// State implied by the API-key window alone.
    ///
    /// The API key is the revocation authority: overwriting its expiry
    /// signs the user out everywhere, so this is the check applied on
    /// every authenticated request and at signin.
    #[must_use]
    pub fn from_api_key(user: &User) -> Self {
        if user.api_key_expired() {
            SessionState::Expired
        } else {
            SessionState::Authenticated
        }
    }

    /// Full state from the user row and their session record, if any.
    #[must_use]
    pub fn evaluate(user: &User, session: Option<&SessionRecord>) -> Self {
        if user.api_key_expired() {
            return SessionState::Expired;
        }

        match session {
            None => SessionState::Anonymous,
            Some(record) if record.is_expired() => SessionState::Expired,
            Some(_) => SessionState::Authenticated,
        }
    }

    /// Check whether this state permits authenticated operations.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use uuid::Uuid;

    fn user_with_key_expiry(expires_at: DateTime<Utc>) -> User {
        User {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            full_name: "Alice Smith".into(),
            email: "alice@example.com".into(),
            username: "alice_01".into(),
            password_hash: "$argon2id$stub".into(),
            api_key_hash: "$argon2id$stub".into(),
            api_key_expires_at: expires_at,
        }
    }

    fn session_with_refresh_expiry(user_id: Uuid, expires_at: DateTime<Utc>) -> SessionRecord {
        SessionRecord {
            id: Uuid::new_v4(),
            user_id,
            access_token_expires_at: Utc::now() + Duration::hours(1),
            refresh_token: "token".into(),
            refresh_token_expires_at: expires_at,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn live_key_and_session_is_authenticated() {
        let user = user_with_key_expiry(Utc::now() + Duration::days(30));
        let session = session_with_refresh_expiry(user.id, Utc::now() + Duration::days(30));

        let state = SessionState::evaluate(&user, Some(&session));
        assert_eq!(state, SessionState::Authenticated);
        assert!(state.is_authenticated());
    }

    #[test]
    fn missing_session_is_anonymous() {
        let user = user_with_key_expiry(Utc::now() + Duration::days(30));
        assert_eq!(SessionState::evaluate(&user, None), SessionState::Anonymous);
    }

    #[test]
    fn elapsed_api_key_wins_over_live_session() {
        let user = user_with_key_expiry(Utc::now() - Duration::days(1));
        let session = session_with_refresh_expiry(user.id, Utc::now() + Duration::days(30));

        assert_eq!(
            SessionState::evaluate(&user, Some(&session)),
            SessionState::Expired
        );
    }

    #[test]
    fn elapsed_refresh_window_is_expired() {
        let user = user_with_key_expiry(Utc::now() + Duration::days(30));
        let session = session_with_refresh_expiry(user.id, Utc::now() - Duration::seconds(1));

        assert_eq!(
            SessionState::evaluate(&user, Some(&session)),
            SessionState::Expired
        );
    }

    #[test]
    fn api_key_state_alone() {
        let live = user_with_key_expiry(Utc::now() + Duration::days(1));
        let dead = user_with_key_expiry(Utc::now() - Duration::days(1));

        assert_eq!(SessionState::from_api_key(&live), SessionState::Authenticated);
        assert_eq!(SessionState::from_api_key(&dead), SessionState::Expired);
    }
}
