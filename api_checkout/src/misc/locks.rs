use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per user id. Holding the guard serializes checkout
/// commits of that user across all workers.
#[derive(Debug, Default)]
pub struct CheckoutLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl CheckoutLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user_id: i64) -> CheckoutGuard<'_> {
        let lock = self.locks.entry(user_id).or_default().clone();
        CheckoutGuard {
            locks: self,
            user_id,
            guard: Some(lock.lock_owned().await),
        }
    }
}

/// Held for the duration of one commit. The user's entry leaves the map once
/// nobody holds or waits for it.
pub struct CheckoutGuard<'a> {
    locks: &'a CheckoutLocks,
    user_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for CheckoutGuard<'_> {
    fn drop(&mut self) {
        // the guard owns a clone of the Arc, release it first
        self.guard.take();
        self.locks
            .locks
            .remove_if(&self.user_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn same_user_waits() {
        let locks = CheckoutLocks::new();
        let guard = locks.acquire(1).await;

        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.acquire(1)).await;
        assert!(blocked.is_err());

        // other users are not affected
        let _other = locks.acquire(2).await;

        drop(guard);
        let _again = locks.acquire(1).await;
    }

    #[tokio::test]
    async fn released_entries_are_removed() {
        let locks = CheckoutLocks::new();
        {
            let _alice = locks.acquire(1).await;
            let _bob = locks.acquire(2).await;
            assert_eq!(locks.locks.len(), 2);
        }
        assert!(locks.locks.is_empty());
    }

    #[tokio::test]
    async fn entry_survives_while_someone_waits() {
        let locks = CheckoutLocks::new();
        let first = locks.acquire(1).await;

        let mut waiter = Box::pin(locks.acquire(1));
        assert!(
            tokio::time::timeout(Duration::from_millis(20), &mut waiter)
                .await
                .is_err()
        );

        drop(first);
        assert_eq!(locks.locks.len(), 1);

        let second = waiter.await;
        drop(second);
        assert!(locks.locks.is_empty());
    }
}
