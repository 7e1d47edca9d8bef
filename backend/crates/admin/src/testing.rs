//! In-memory directory and notifier for unit tests
//!
//! One store backs the auth session gate and the member operations, so a
//! soft delete is visible to both.

use std::sync::{Arc, Mutex, MutexGuard};

use auth::domain::entity::{
    session::Session,
    user::{NewUser, User},
};
use auth::domain::notifier::{Notification, Notifier};
use auth::domain::repository::{SessionRepository, UserRepository};
use auth::domain::value_object::{
    activation_status::{ActivationDecision, ActivationStatus},
    email::Email,
    person_name::PersonName,
    session_token::SessionToken,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use auth::{AuthError, AuthResult};
use chrono::{DateTime, Duration, Utc};
use platform::password::PasswordScheme;

use crate::domain::repository::MemberRepository;
use crate::error::AdminResult;

pub(crate) const TEST_PASSWORD: &str = "Passw0rd!";

#[derive(Default)]
struct State {
    users: Vec<User>,
    sessions: Vec<Session>,
    next_id: i64,
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryDirectory {
    state: Arc<Mutex<State>>,
}

impl InMemoryDirectory {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Each seeded member is one second newer than the previous one
    pub(crate) fn seed(&self, name: &str, email: &str, role: UserRole) -> UserId {
        let raw = RawPassword::new(TEST_PASSWORD.to_string()).unwrap();
        let new_user = NewUser::register(
            PersonName::new(name).unwrap(),
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, PasswordScheme::Sha256Hex).unwrap(),
            role,
        );
        self.insert_user(&new_user).unwrap().id
    }

    fn insert_user(&self, user: &NewUser) -> AuthResult<User> {
        let mut state = self.lock();
        if state
            .users
            .iter()
            .any(|u| u.deleted_at.is_none() && u.email == user.email)
        {
            return Err(AuthError::AlreadyExists);
        }

        state.next_id += 1;
        let created_at = Utc::now() + Duration::seconds(state.next_id);
        let created = User {
            id: UserId::from_raw(state.next_id),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            role: user.role,
            is_active: user.is_active,
            activation_status: user.activation_status,
            image_url: user.image_url.clone(),
            created_at,
            updated_at: created_at,
            deleted_at: None,
        };
        state.users.push(created.clone());
        Ok(created)
    }

    /// Live member by id
    pub(crate) fn member(&self, id: UserId) -> Option<User> {
        self.lock()
            .users
            .iter()
            .find(|u| u.deleted_at.is_none() && u.id == id)
            .cloned()
    }

    pub(crate) fn tombstone(&self, id: UserId) {
        if let Some(user) = self.lock().users.iter_mut().find(|u| u.id == id) {
            user.deleted_at = Some(Utc::now());
        }
    }

    /// Issue a live session for `user_id` and return its cookie header value
    pub(crate) fn session_cookie(&self, user_id: UserId) -> String {
        let session = Session::issue(user_id, Duration::days(7), Utc::now());
        let cookie = format!("session_token={}", session.session_token.as_str());
        self.lock().sessions.push(session);
        cookie
    }

    pub(crate) fn live_sessions_of(&self, user_id: UserId) -> usize {
        self.lock()
            .sessions
            .iter()
            .filter(|s| s.deleted_at.is_none() && s.user_id == user_id)
            .count()
    }
}

impl UserRepository for InMemoryDirectory {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        self.insert_user(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.member(user_id))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.deleted_at.is_none() && &u.email == email)
            .cloned())
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

impl SessionRepository for InMemoryDirectory {
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

impl MemberRepository for InMemoryDirectory {
    async fn list_active(&self) -> AdminResult<Vec<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .filter(|u| u.deleted_at.is_none() && u.is_active)
            .cloned()
            .collect())
    }

    async fn list_pending_team_leads(&self) -> AdminResult<Vec<User>> {
        let mut pending: Vec<User> = self
            .lock()
            .users
            .iter()
            .filter(|u| {
                u.deleted_at.is_none()
                    && u.role == UserRole::TeamLead
                    && u.activation_status == ActivationStatus::Pending
            })
            .cloned()
            .collect();
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pending)
    }

    async fn resolve_team_lead_request(
        &self,
        member_id: UserId,
        decision: ActivationDecision,
    ) -> AdminResult<Option<User>> {
        let mut state = self.lock();
        let Some(user) = state.users.iter_mut().find(|u| {
            u.id == member_id
                && u.deleted_at.is_none()
                && u.role == UserRole::TeamLead
                && u.activation_status == ActivationStatus::Pending
        }) else {
            return Ok(None);
        };

        user.is_active = decision.is_active();
        user.activation_status = decision.status();
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_role(&self, member_id: UserId, role: UserRole) -> AdminResult<bool> {
        let mut state = self.lock();
        match state
            .users
            .iter_mut()
            .find(|u| u.id == member_id && u.deleted_at.is_none())
        {
            Some(user) => {
                user.role = role;
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, member_id: UserId) -> AdminResult<bool> {
        let now = Utc::now();
        let mut state = self.lock();
        let Some(user) = state
            .users
            .iter_mut()
            .find(|u| u.id == member_id && u.deleted_at.is_none())
        else {
            return Ok(false);
        };
        user.deleted_at = Some(now);

        for session in state.sessions.iter_mut() {
            if session.user_id == member_id && session.deleted_at.is_none() {
                session.deleted_at = Some(now);
            }
        }
        Ok(true)
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
