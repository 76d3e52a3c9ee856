use log::{debug, warn};
use regex::Regex;


/// URI patterns that force the maintenance page, even for allowed clients.
#[derive(Clone, Debug, Default)]
pub struct DenyUri {
    patterns: Vec<Regex>,
}

impl DenyUri {
    /// Compile the configured patterns. Invalid patterns are logged and skipped.
    pub fn parse(entries: &[String]) -> DenyUri {
        let patterns = entries
            .iter()
            .filter_map(|entry| match Regex::new(entry) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    warn!("Could not compile deny URI pattern '{}': {}", entry, err);
                    None
                }
            })
            .collect();
        DenyUri { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check if a URI matches one of the deny patterns.
    /// Patterns are unanchored unless they anchor themselves.
    pub fn is_denied(&self, uri: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            debug!("URL: {} | Pattern: {}", uri, pattern);
            pattern.is_match(uri)
        })
    }
}
