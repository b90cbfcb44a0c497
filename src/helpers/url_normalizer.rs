use url::Url;
use crate::errors::{LeakDetectorError, LeakDetectorResult};

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

pub struct UrlNormalizer;

impl UrlNormalizer {
    /// Trims the input and prepends `https://` unless an http(s) scheme is already present.
    pub fn with_scheme(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.starts_with(HTTP_PREFIX) || trimmed.starts_with(HTTPS_PREFIX) {
            trimmed.to_string()
        } else {
            format!("{}{}", HTTPS_PREFIX, trimmed)
        }
    }

    /// Normalizes user input into a submittable URL.
    ///
    /// The returned string is the prefixed input itself, not the parser's
    /// serialization, so `"example.com"` stays `"https://example.com"` without a
    /// trailing slash. Feeding the result back in returns it unchanged.
    pub fn normalize(input: &str) -> LeakDetectorResult<String> {
        let candidate = Self::with_scheme(input);

        match Url::parse(&candidate) {
            Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(candidate),
            Ok(_) => Err(LeakDetectorError::invalid_url(input)),
            Err(e) => {
                log::debug!("Rejected URL '{}': {}", candidate, e);
                Err(LeakDetectorError::invalid_url(input))
            }
        }
    }
}
