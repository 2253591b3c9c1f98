use chrono::{DateTime, Utc};
use ridelink_domain::identity::Principal;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// What survives a page reload: the token plus the principal it was issued
/// for. The storage medium is an implementation detail behind TokenCache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub principal: Principal,
    pub issued_at: DateTime<Utc>,
}

/// Persistence seam for the session store. Reads are synchronous; the HTTP
/// client reads the token from here on every authorized request.
pub trait TokenCache: Send + Sync {
    fn load(&self) -> Option<SessionRecord>;
    fn save(&self, record: &SessionRecord);
    fn clear(&self);
}

/// In-memory cache for tests and headless embedding.
#[derive(Default)]
pub struct InMemoryTokenCache {
    record: Mutex<Option<SessionRecord>>,
}

impl InMemoryTokenCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenCache for InMemoryTokenCache {
    fn load(&self) -> Option<SessionRecord> {
        match self.record.lock() {
            Ok(guard) => (*guard).clone(),
            Err(_) => None,
        }
    }

    fn save(&self, record: &SessionRecord) {
        if let Ok(mut guard) = self.record.lock() {
            *guard = Some(record.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.record.lock() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridelink_domain::identity::Role;
    use uuid::Uuid;

    fn record() -> SessionRecord {
        SessionRecord {
            token: "tok-1".to_string(),
            principal: Principal {
                id: Uuid::new_v4(),
                email: "rider@example.com".to_string(),
                role: Role::Customer,
                profile_complete: true,
            },
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_load_clear() {
        let cache = InMemoryTokenCache::new();
        assert!(cache.load().is_none());

        cache.save(&record());
        assert_eq!(cache.load().unwrap().token, "tok-1");

        cache.clear();
        assert!(cache.load().is_none());

        // Clearing twice is a no-op
        cache.clear();
        assert!(cache.load().is_none());
    }
}
