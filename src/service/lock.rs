//! Per-guild serialization of handler work.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Hands out one async mutex per guild.
///
/// Every event handler touching a guild's mirror holds that guild's lock for the
/// whole read-modify-write, so concurrent events for the same guild run one after
/// another while different guilds proceed in parallel.
#[derive(Clone, Default)]
pub struct GuildLocks {
    locks: Arc<Mutex<HashMap<u64, Arc<Mutex<()>>>>>,
}

impl GuildLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and acquires the lock of a guild.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn lock(&self, guild_id: u64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(guild_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Drops the lock of a guild the bot no longer serves.
    ///
    /// Kept while any guard or waiter still holds it.
    pub async fn forget(&self, guild_id: u64) {
        let mut locks = self.locks.lock().await;
        if locks
            .get(&guild_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&guild_id);
        }
    }
}
