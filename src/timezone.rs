use time::{Date, OffsetDateTime};

/// Today's date in the server's local timezone.
///
/// Falls back to UTC when the local offset cannot be determined, e.g. when
/// the process has more than one thread on some Unix platforms.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .inspect_err(|error| tracing::debug!("Could not get local offset, using UTC: {error}"))
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
