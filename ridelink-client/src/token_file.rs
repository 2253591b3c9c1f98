use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use ridelink_core::token::{SessionRecord, TokenCache};

/// JSON-file persistence for the session, so it survives a restart.
/// Failures degrade to the logged-out state instead of erroring: logout
/// must never fail.
pub struct FileTokenCache {
    path: PathBuf,
}

impl FileTokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenCache for FileTokenCache {
    fn load(&self) -> Option<SessionRecord> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("discarding unreadable session file: {}", err);
                None
            }
        }
    }

    fn save(&self, record: &SessionRecord) {
        match serde_json::to_string(record) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    warn!("failed to persist session: {}", err);
                }
            }
            Err(err) => warn!("failed to serialize session: {}", err),
        }
    }

    fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                warn!("failed to remove session file: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ridelink_domain::identity::{Principal, Role};
    use uuid::Uuid;

    fn record() -> SessionRecord {
        SessionRecord {
            token: "tok-file".to_string(),
            principal: Principal {
                id: Uuid::new_v4(),
                email: "rider@example.com".to_string(),
                role: Role::Customer,
                profile_complete: true,
            },
            issued_at: Utc::now(),
        }
    }

    fn temp_cache() -> FileTokenCache {
        let path = std::env::temp_dir().join(format!("ridelink-session-{}.json", Uuid::new_v4()));
        FileTokenCache::new(path)
    }

    #[test]
    fn test_round_trip_survives_reload() {
        let cache = temp_cache();
        cache.save(&record());

        // A fresh cache over the same path sees the session
        let reloaded = FileTokenCache::new(cache.path.clone());
        let loaded = reloaded.load().unwrap();
        assert_eq!(loaded.token, "tok-file");
        assert_eq!(loaded.principal.role, Role::Customer);

        cache.clear();
        assert!(reloaded.load().is_none());
    }

    #[test]
    fn test_clear_missing_file_is_a_no_op() {
        let cache = temp_cache();
        cache.clear();
        cache.clear();
        assert!(cache.load().is_none());
    }

    #[test]
    fn test_corrupt_file_degrades_to_logged_out() {
        let cache = temp_cache();
        fs::write(&cache.path, "{not json").unwrap();
        assert!(cache.load().is_none());
        cache.clear();
    }
}
