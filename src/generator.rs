use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of new record identifiers, injected into services so tests can
/// substitute a deterministic sequence
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Source of the current time, injected into services so tests can pin
/// "now" to a fixed instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production identifier source backed by random v4 UUIDs
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Production clock backed by the system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
