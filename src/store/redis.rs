//! Redis client for the externally-owned group set.
//!
//! The group names live in a single set at key `groupset`, read-only from
//! this service's perspective.

use redis::AsyncCommands;

use crate::config::schema::RedisConfig;
use crate::store::StoreResult;

/// Key holding the set of group names.
const GROUP_SET_KEY: &str = "groupset";

/// Handle to the key-value store.
#[derive(Debug, Clone)]
pub struct GroupStore {
    client: redis::Client,
}

impl GroupStore {
    /// Build the client from settings. The client is lazy: no handshake
    /// happens until the first command, so connectivity problems surface
    /// on first use rather than at startup.
    pub fn connect(config: &RedisConfig) -> StoreResult<Self> {
        let client = redis::Client::open(config.url())?;
        Ok(Self { client })
    }

    /// All members of the group set. Set semantics: no duplicates, no
    /// meaningful order.
    pub async fn list_groups(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let groups: Vec<String> = conn.smembers(GROUP_SET_KEY).await?;
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_is_lazy() {
        // Nothing listens on this port; construction must still succeed.
        let config = RedisConfig {
            addr: "127.0.0.1:1".into(),
            password: String::new(),
            db: 0,
        };
        assert!(GroupStore::connect(&config).is_ok());
    }
}
