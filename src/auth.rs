//! Request signing.
//!
//! Every call to the API carries three query parameters: `ts`, `apikey` and
//! `hash`, where `hash` is the lowercase hex MD5 of `ts`, the private key and
//! the public key concatenated in that order. The server checks the timestamp
//! for recency, so a signature is computed fresh for each request.

use serde::Serialize;
use std::fmt;

/// Public/private key pair issued by the developer portal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// The public key, sent as `apikey`.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign for the given Unix timestamp (seconds).
    pub fn sign_at(&self, ts: i64) -> AuthParams {
        AuthParams {
            ts,
            apikey: self.public_key.clone(),
            hash: sign(&self.public_key, &self.private_key, ts),
        }
    }

    /// Sign for the clock's current time.
    pub fn sign_now(&self, clock: &dyn Clock) -> AuthParams {
        self.sign_at(clock.now())
    }
}

// The private key never appears in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// The authentication triple appended to a request's query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthParams {
    /// Unix timestamp in seconds at signing time.
    pub ts: i64,
    /// Public key.
    pub apikey: String,
    /// `md5(ts + private_key + public_key)`, lowercase hex.
    pub hash: String,
}

/// Compute the request signature for `ts`.
///
/// # Example
///
/// ```rust
/// // Worked example from the API authorization docs.
/// assert_eq!(marvel::auth::sign("1234", "abcd", 1), "ffd275c5130566a2916217b101f26150");
/// ```
pub fn sign(public_key: &str, private_key: &str, ts: i64) -> String {
    let digest = md5::compute(format!("{ts}{private_key}{public_key}").as_bytes());
    hex::encode(digest.0)
}

/// Source of the current Unix time, injectable for tests.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now(&self) -> i64;
}

/// Wall clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
