//! In-memory backend shared by the view integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use roster_core::{NewUser, RosterError, User, UserApi, UserId};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub const BASE_URL: &str = "http://fake.invalid";

/// Behaves like the users backend: ids ascend from 1, emails are unique,
/// `GET /users/` returns creation order. Failures can be queued per call.
#[derive(Default)]
pub struct FakeApi {
    users: Mutex<Vec<User>>,
    list_failures: Mutex<VecDeque<RosterError>>,
    create_failures: Mutex<VecDeque<RosterError>>,
    hang_on_create: AtomicBool,
    pub create_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user directly on the "server", bypassing the client
    pub fn seed(&self, name: &str, email: &str, bio: Option<&str>) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User::new(
            UserId::new(users.len() as i64 + 1),
            name,
            email,
            bio.map(String::from),
        );
        users.push(user.clone());
        user
    }

    pub fn fail_next_list(&self, error: RosterError) {
        self.list_failures.lock().unwrap().push_back(error);
    }

    pub fn fail_next_create(&self, error: RosterError) {
        self.create_failures.lock().unwrap().push_back(error);
    }

    pub fn hang_on_create(&self) {
        self.hang_on_create.store(true, Ordering::SeqCst);
    }

    pub fn server_users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn lists(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserApi for FakeApi {
    async fn create_user(&self, request: &NewUser) -> roster_core::Result<User> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if self.hang_on_create.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }

        if let Some(error) = self.create_failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == request.email) {
            return Err(RosterError::conflict("Email already registered"));
        }

        let user = User::new(
            UserId::new(users.len() as i64 + 1),
            request.name.clone(),
            request.email.clone(),
            Some(request.bio.clone()),
        );
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> roster_core::Result<Vec<User>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.list_failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: UserId) -> roster_core::Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RosterError::UserNotFound(id))
    }

    fn base_url(&self) -> &str {
        BASE_URL
    }
}

/// Fill the form of a session
pub fn fill(session: &mut roster_view::Session, name: &str, email: &str, bio: &str) {
    let form = session.form_mut();
    form.set_name(name);
    form.set_email(email);
    form.set_bio(bio);
}
