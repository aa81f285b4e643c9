use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side half of a session. The browser only holds the session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    pub(crate) access_token: String,
    pub(crate) expires_at: DateTime<Utc>,
}
