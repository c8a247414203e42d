use std::time::{Duration, Instant, SystemTime};

crate::impl_equatable_via_eq!(Duration, Instant, SystemTime);

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use crate::Equatable;

    #[test]
    fn test_system_time_nanosecond_apart() {
        let t = UNIX_EPOCH + Duration::from_secs(42);
        assert!(t.equal(&(UNIX_EPOCH + Duration::from_millis(42_000))));
        assert!(!t.equal(&(t + Duration::from_nanos(1))));
    }

    #[test]
    fn test_duration() {
        assert!(Duration::from_secs(1).equal(&Duration::from_millis(1000)));
    }
}
