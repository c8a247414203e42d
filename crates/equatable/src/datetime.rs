use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::Equatable;

/// Two timestamps are equal when they denote the same instant. The offset
/// they are expressed in does not matter.
impl<Tz: TimeZone> Equatable for DateTime<Tz> {
    fn equal(&self, other: &Self) -> bool {
        self.naive_utc() == other.naive_utc()
    }
}

crate::impl_equatable_via_eq!(NaiveDate, NaiveDateTime, NaiveTime);

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};

    use super::*;

    fn at(secs: i64) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_same_instant_other_offset() {
        let expected = at(42);
        let actual = expected.with_timezone(&FixedOffset::west_opt(60 * 60).unwrap());
        assert!(expected.equal(&actual));
        assert_ne!(expected.offset(), actual.offset());
    }

    #[test]
    fn test_one_nanosecond_apart() {
        let expected = at(42);
        assert!(!expected.equal(&(expected + Duration::nanoseconds(1))));
    }
}
