//! In-memory repository fakes for service unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use park_common::auth::JwtService;
use park_core::entities::{
    FavoriteSlot, NewUser, ParkingHistory, ParkingLot, ParkingSlot, Session, User,
};
use park_core::traits::{
    FavoriteSlotRepository, ParkingHistoryRepository, ParkingLotRepository,
    ParkingSlotRepository, RepoResult, SessionRepository, UserRepository,
};
use park_core::DomainError;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<(User, String)>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|(u, _)| u.email == email))
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: Utc::now(),
        };
        users.push((created.clone(), user.password_hash.clone()));
        Ok(created)
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone()))
    }
}

#[derive(Default)]
pub struct InMemorySessionRepo {
    sessions: Mutex<HashMap<i64, Session>>,
}

#[async_trait]
impl SessionRepository for InMemorySessionRepo {
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(&user_id).cloned())
    }

    async fn replace(&self, user_id: i64, refresh_token: &str) -> RepoResult<()> {
        self.sessions.lock().unwrap().insert(
            user_id,
            Session {
                user_id,
                refresh_token: refresh_token.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete_by_user(&self, user_id: i64) -> RepoResult<()> {
        self.sessions.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryParkingLotRepo {
    lots: Mutex<Vec<ParkingLot>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ParkingLotRepository for InMemoryParkingLotRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ParkingLot>> {
        Ok(self.lots.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<ParkingLot>> {
        Ok(self.lots.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryParkingSlotRepo {
    slots: Mutex<Vec<ParkingSlot>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ParkingSlotRepository for InMemoryParkingSlotRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ParkingSlot>> {
        Ok(self
            .slots
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_by_lot(&self, parking_lot_id: i64) -> RepoResult<Vec<ParkingSlot>> {
        let mut slots: Vec<ParkingSlot> = self
            .slots
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.parking_lot_id == parking_lot_id)
            .cloned()
            .collect();
        slots.sort_by_key(|s| s.slot_number);
        Ok(slots)
    }
}

#[derive(Default)]
pub struct InMemoryFavoriteSlotRepo {
    favorites: Mutex<Vec<FavoriteSlot>>,
    next_id: AtomicI64,
}

#[async_trait]
impl FavoriteSlotRepository for InMemoryFavoriteSlotRepo {
    async fn find_by_user_and_id(&self, user_id: i64, id: i64) -> RepoResult<Option<FavoriteSlot>> {
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.user_id == user_id && f.id == id)
            .cloned())
    }

    async fn find_by_user_and_slot(
        &self,
        user_id: i64,
        slot_id: i64,
    ) -> RepoResult<Option<FavoriteSlot>> {
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.user_id == user_id && f.slot_id == slot_id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<FavoriteSlot>> {
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, user_id: i64, slot_id: i64) -> RepoResult<FavoriteSlot> {
        let mut favorites = self.favorites.lock().unwrap();
        if favorites
            .iter()
            .any(|f| f.user_id == user_id && f.slot_id == slot_id)
        {
            return Err(DomainError::SlotAlreadyFavorited(slot_id));
        }

        let favorite = FavoriteSlot {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id,
            slot_id,
            created_at: Utc::now(),
        };
        favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.favorites.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryParkingHistoryRepo {
    histories: Mutex<Vec<ParkingHistory>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ParkingHistoryRepository for InMemoryParkingHistoryRepo {
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<ParkingHistory>> {
        let mut histories: Vec<ParkingHistory> = self
            .histories
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect();
        histories.sort_by(|a, b| b.parked_at.cmp(&a.parked_at));
        Ok(histories)
    }

    async fn create(&self, user_id: i64, parking_lot_id: i64) -> RepoResult<ParkingHistory> {
        let history = ParkingHistory {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id,
            parking_lot_id,
            parked_at: Utc::now(),
        };
        self.histories.lock().unwrap().push(history.clone());
        Ok(history)
    }
}

/// A fully in-memory service context plus direct handles for assertions
pub struct TestEnv {
    pub ctx: ServiceContext,
    pub sessions: Arc<InMemorySessionRepo>,
    pub lots: Arc<InMemoryParkingLotRepo>,
    pub slots: Arc<InMemoryParkingSlotRepo>,
}

impl TestEnv {
    pub fn new() -> Self {
        let sessions = Arc::new(InMemorySessionRepo::default());
        let lots = Arc::new(InMemoryParkingLotRepo::default());
        let slots = Arc::new(InMemoryParkingSlotRepo::default());

        let ctx = ServiceContextBuilder::new()
            .user_repo(Arc::new(InMemoryUserRepo::default()))
            .session_repo(sessions.clone())
            .parking_lot_repo(lots.clone())
            .parking_slot_repo(slots.clone())
            .favorite_slot_repo(Arc::new(InMemoryFavoriteSlotRepo::default()))
            .parking_history_repo(Arc::new(InMemoryParkingHistoryRepo::default()))
            .jwt_service(Arc::new(JwtService::new(
                "test-secret-key-that-is-long-enough",
                900,
                604_800,
            )))
            .build()
            .unwrap();

        Self {
            ctx,
            sessions,
            lots,
            slots,
        }
    }

    pub fn session_for(&self, user_id: i64) -> Option<Session> {
        self.sessions.sessions.lock().unwrap().get(&user_id).cloned()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.sessions.lock().unwrap().len()
    }

    pub fn add_lot(&self, name: &str, total_slots: i32) -> i64 {
        let id = self.lots.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.lots.lots.lock().unwrap().push(ParkingLot {
            id,
            name: name.to_string(),
            address: format!("{name} street"),
            total_slots,
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_slot(&self, parking_lot_id: i64, slot_number: i64, is_available: bool) -> i64 {
        let id = self.slots.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.slots.slots.lock().unwrap().push(ParkingSlot {
            id,
            parking_lot_id,
            slot_number,
            is_available,
        });
        id
    }
}
