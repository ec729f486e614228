/// Externally supplied identifiers (`user_id`, `pull_request_id`) are opaque strings.
pub type ExternalId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
