//! In-memory repositories and notifier for unit tests

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use platform::password::PasswordScheme;

use crate::domain::entity::{
    session::Session,
    user::{NewUser, User},
};
use crate::domain::notifier::{Notification, Notifier};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    session_token::SessionToken,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: Vec<User>,
    sessions: Vec<Session>,
    next_id: i64,
}

/// Users and sessions behind one lock, shared by clones
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn insert_user(&self, user: &NewUser) -> AuthResult<User> {
        let mut state = self.lock();
        let taken = state
            .users
            .iter()
            .any(|u| u.deleted_at.is_none() && u.email == user.email);
        if taken {
            return Err(AuthError::AlreadyExists);
        }

        state.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId::from_raw(state.next_id),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            role: user.role,
            is_active: user.is_active,
            activation_status: user.activation_status,
            image_url: user.image_url.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        state.users.push(created.clone());
        Ok(created)
    }

    pub(crate) fn seed_user(&self, name: &str, email: &str, password: &str, role: UserRole) -> UserId {
        self.seed_user_with_scheme(name, email, password, role, PasswordScheme::Sha256Hex)
    }

    pub(crate) fn seed_user_with_scheme(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
        scheme: PasswordScheme,
    ) -> UserId {
        let raw = RawPassword::new(password.to_string()).unwrap();
        let new_user = NewUser::register(
            PersonName::new(name).unwrap(),
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, scheme).unwrap(),
            role,
        );
        self.insert_user(&new_user).unwrap().id
    }

    pub(crate) fn user_by_email(&self, email: &str) -> Option<User> {
        self.lock()
            .users
            .iter()
            .find(|u| u.deleted_at.is_none() && u.email.as_str() == email)
            .cloned()
    }

    pub(crate) fn user_count(&self) -> usize {
        self.lock()
            .users
            .iter()
            .filter(|u| u.deleted_at.is_none())
            .count()
    }

    pub(crate) fn soft_delete_user(&self, id: UserId) {
        let mut state = self.lock();
        if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
            user.deleted_at = Some(Utc::now());
        }
    }

    pub(crate) fn insert_session_expiring(
        &self,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> SessionToken {
        let token = SessionToken::generate();
        self.lock().sessions.push(Session {
            user_id,
            session_token: token.clone(),
            expires_at,
            created_at: expires_at - chrono::Duration::days(7),
            deleted_at: None,
        });
        token
    }

    pub(crate) fn has_live_session(&self, token: &SessionToken) -> bool {
        self.lock()
            .sessions
            .iter()
            .any(|s| s.deleted_at.is_none() && &s.session_token == token)
    }

    pub(crate) fn live_session_count(&self) -> usize {
        self.lock()
            .sessions
            .iter()
            .filter(|s| s.deleted_at.is_none())
            .count()
    }
}

impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        self.insert_user(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.deleted_at.is_none() && u.id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.user_by_email(email.as_str()))
    }

    async fn find_by_role(&self, role: UserRole) -> AuthResult<Vec<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .filter(|u| u.deleted_at.is_none() && u.role == role)
            .cloned()
            .collect())
    }
}

impl SessionRepository for InMemoryStore {
    async fn insert(&self, session: &Session) -> AuthResult<()> {
        self.lock().sessions.push(session.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &SessionToken) -> AuthResult<Option<Session>> {
        Ok(self
            .lock()
            .sessions
            .iter()
            .find(|s| s.deleted_at.is_none() && &s.session_token == token)
            .cloned())
    }

    async fn delete(&self, token: &SessionToken) -> AuthResult<()> {
        let now = Utc::now();
        for session in self.lock().sessions.iter_mut() {
            if session.deleted_at.is_none() && &session.session_token == token {
                session.deleted_at = Some(now);
            }
        }
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let mut purged = 0;
        for session in self.lock().sessions.iter_mut() {
            if session.deleted_at.is_none() && session.is_expired_at(now) {
                session.deleted_at = Some(now);
                purged += 1;
            }
        }
        Ok(purged)
    }
}

/// Records every notification; optionally fails delivery
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> AuthResult<()> {
        if self.fail {
            return Err(AuthError::Notification("mail service unreachable".to_string()));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
