use chrono::{DateTime, Utc};

/// Current UTC time at millisecond precision, the precision BSON dates keep.
/// A sub-millisecond remainder rounds up, so the stamp is never earlier than
/// the moment of the call and a later read returns the same value.
pub fn now_utc() -> DateTime<Utc> {
    let now = Utc::now();
    let partial = now.timestamp_subsec_nanos() % 1_000_000 != 0;
    let millis = now.timestamp_millis() + i64::from(partial);
    DateTime::from_timestamp_millis(millis).unwrap_or(now)
}
