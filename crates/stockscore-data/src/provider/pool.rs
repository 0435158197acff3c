//! 커넥터 풀.
//!
//! `&mut` 접근이 필요한 클라이언트를 동시 조회마다 하나씩 빌려 줍니다.
//! 유휴 커넥터가 없으면 새로 만들고, 반납 시 유휴 목록이 `max_idle`개를
//! 넘으면 버립니다.

use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// 유휴 커넥터 목록.
pub(crate) struct ConnectorPool<T> {
    idle: Mutex<Vec<T>>,
    max_idle: usize,
}

impl<T> ConnectorPool<T> {
    pub(crate) fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
        }
    }

    /// 유휴 커넥터를 꺼내거나, 없으면 `create`로 새로 만듭니다.
    ///
    /// 잠금은 꺼내는 순간에만 잡으므로 빌린 커넥터를 `.await` 너머로 들고 있어도
    /// 다른 조회를 막지 않습니다.
    pub(crate) fn checkout<E>(
        &self,
        create: impl FnOnce() -> Result<T, E>,
    ) -> Result<PooledConnector<'_, T>, E> {
        let reused = self.lock_idle().pop();
        let connector = match reused {
            Some(connector) => connector,
            None => create()?,
        };

        Ok(PooledConnector {
            pool: self,
            connector: Some(connector),
        })
    }

    /// 현재 유휴 커넥터 수.
    #[cfg(test)]
    pub(crate) fn idle_count(&self) -> usize {
        self.lock_idle().len()
    }

    fn checkin(&self, connector: T) {
        let mut idle = self.lock_idle();
        if idle.len() < self.max_idle {
            idle.push(connector);
        }
    }

    fn lock_idle(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        // Vec push/pop 도중에는 패닉이 나지 않으므로 poison 상태여도 목록은 온전함
        self.idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// 빌려 간 커넥터. drop 시 풀로 반납됩니다.
pub(crate) struct PooledConnector<'a, T> {
    pool: &'a ConnectorPool<T>,
    connector: Option<T>,
}

impl<T> Deref for PooledConnector<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.connector.as_ref().unwrap_or_else(|| unreachable!("반납 전에는 항상 Some"))
    }
}

impl<T> DerefMut for PooledConnector<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.connector.as_mut().unwrap_or_else(|| unreachable!("반납 전에는 항상 Some"))
    }
}

impl<T> Drop for PooledConnector<'_, T> {
    fn drop(&mut self) {
        if let Some(connector) = self.connector.take() {
            self.pool.checkin(connector);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    fn counting(created: &AtomicUsize) -> impl FnOnce() -> Result<usize, String> + '_ {
        move || Ok(created.fetch_add(1, Ordering::SeqCst))
    }

    #[test]
    fn test_concurrent_checkouts_get_distinct_connectors() {
        let pool = ConnectorPool::new(4);
        let created = AtomicUsize::new(0);

        let first = pool.checkout(counting(&created)).unwrap();
        let second = pool.checkout(counting(&created)).unwrap();

        assert_ne!(*first, *second);
        assert_eq!(created.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_returned_connector_is_reused() {
        let pool = ConnectorPool::new(4);
        let created = AtomicUsize::new(0);

        let id = *pool.checkout(counting(&created)).unwrap();
        assert_eq!(pool.idle_count(), 1);

        let again = pool.checkout(counting(&created)).unwrap();
        assert_eq!(*again, id);
        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_idle_list_is_capped() {
        let pool = ConnectorPool::new(2);
        let created = AtomicUsize::new(0);

        let held: Vec<_> = (0..5).map(|_| pool.checkout(counting(&created)).unwrap()).collect();
        drop(held);

        assert_eq!(created.load(Ordering::SeqCst), 5);
        assert_eq!(pool.idle_count(), 2);
    }

    #[test]
    fn test_create_failure_is_returned() {
        let pool: ConnectorPool<usize> = ConnectorPool::new(2);

        let result = pool.checkout(|| Err("connect refused".to_string()));

        assert_eq!(result.err(), Some("connect refused".to_string()));
        assert_eq!(pool.idle_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookups_held_across_await_run_in_parallel() {
        let pool = Arc::new(ConnectorPool::new(4));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let pool = Arc::clone(&pool);
                let in_flight = Arc::clone(&in_flight);
                let peak = Arc::clone(&peak);
                tokio::spawn(async move {
                    let mut connector = pool.checkout(|| Ok::<_, String>(0u32)).unwrap();
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    *connector += 1;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(peak.load(Ordering::SeqCst), 4);
        assert_eq!(pool.idle_count(), 4);
    }
}
