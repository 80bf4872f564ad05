use std::sync::Arc;

use once_cell::sync::OnceCell;
use uuid::Uuid;

/// Carries an id minted once per process, so callers can see they all hold
/// the same instance.
pub struct InstanceTracker {
    id: Uuid,
}

impl InstanceTracker {
    fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

static GLOBAL_TRACKER: OnceCell<Arc<InstanceTracker>> = OnceCell::new();

/// Hands out the process-wide instance, creating it on first call.
pub fn instance() -> Arc<InstanceTracker> {
    GLOBAL_TRACKER
        .get_or_init(|| Arc::new(InstanceTracker::new()))
        .clone()
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::singleton::instance;

    #[test]
    fn test_every_call_returns_the_same_instance() {
        let first = instance();
        let second = instance();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.id(), second.id());
    }
}
