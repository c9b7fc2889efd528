// src/breach/mod.rs
//
// k-anonymity breach lookup against a HaveIBeenPwned-style range endpoint.
// Only the first 5 hex characters of the SHA-1 digest ever leave the
// process; the full hash and the password itself do not.

use std::time::Duration;

use sha1::{Digest, Sha1};

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const PREFIX_LEN: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreachResult {
    pub found: bool,
    pub count: u64,
}

pub struct BreachChecker {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl BreachChecker {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Check whether a password appears in the breach corpus.
    ///
    /// Breach intelligence is best-effort: any transport failure, non-2xx
    /// status, or unparseable body degrades to "not found" so the caller is
    /// never blocked on the remote service.
    pub async fn check(&self, password: &str) -> BreachResult {
        let digest = hex::encode_upper(Sha1::digest(password.as_bytes()));
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);
        let url = format!("{}/range/{}", self.base_url, prefix);

        let response = match self.client.get(&url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("Breach range query failed: {}", e);
                return BreachResult::default();
            }
        };

        if !response.status().is_success() {
            log::debug!("Breach range query returned {}", response.status());
            return BreachResult::default();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("Failed to read breach response body: {}", e);
                return BreachResult::default();
            }
        };

        scan_range_body(&body, suffix)
    }
}

/// Scan a `SUFFIX:COUNT` range body for the given hash suffix.
/// Malformed lines are skipped.
fn scan_range_body(body: &str, suffix: &str) -> BreachResult {
    for line in body.lines() {
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if candidate.trim().eq_ignore_ascii_case(suffix) {
            match count.trim().parse::<u64>() {
                Ok(count) => return BreachResult { found: true, count },
                Err(_) => continue,
            }
        }
    }
    BreachResult::default()
}
