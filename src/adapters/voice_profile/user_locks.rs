//! Per-user write locks.
//!
//! Merging a sample is a load-modify-save cycle that must not interleave
//! with another write for the same user. Handlers hold the user's guard for
//! the whole cycle; different users never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::UserId;

/// Registry of one async mutex per user id.
#[derive(Debug, Clone, Default)]
pub struct UserLocks {
    locks: Arc<StdMutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive write access to `user_id`'s profile.
    pub async fn acquire(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            // Drop entries nobody is holding or waiting on.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(user_id.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of users with a held or awaited lock.
    pub fn active(&self) -> usize {
        let locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.values().filter(|lock| Arc::strong_count(lock) > 1).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn same_user_is_serialized() {
        let locks = UserLocks::new();
        let guard = locks.acquire(&user("alice")).await;

        let contender = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(&user("alice")).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }

    #[tokio::test]
    async fn different_users_do_not_contend() {
        let locks = UserLocks::new();
        let _alice = locks.acquire(&user("alice")).await;

        tokio::time::timeout(Duration::from_millis(100), locks.acquire(&user("bob")))
            .await
            .expect("bob should not wait on alice");
        assert_eq!(locks.active(), 1);
    }

    #[tokio::test]
    async fn released_locks_are_pruned() {
        let locks = UserLocks::new();
        drop(locks.acquire(&user("alice")).await);
        let _bob = locks.acquire(&user("bob")).await;

        assert_eq!(locks.locks.lock().unwrap().len(), 1);
    }
}
