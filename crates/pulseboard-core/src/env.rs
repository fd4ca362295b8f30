//! Startup environment mapping and the redaction filter applied before it is
//! shown to clients.

use std::collections::BTreeMap;

/// Key/value pairs captured once at startup. Sorted for deterministic output.
pub type EnvMap = BTreeMap<String, String>;

/// Case-insensitive substrings that mark a key as sensitive.
pub const SENSITIVE_MARKERS: [&str; 4] = ["password", "secret", "key", "token"];

/// True when the lowercased key contains any of [`SENSITIVE_MARKERS`].
pub fn is_sensitive(key: &str) -> bool {
    let lower = key.to_lowercase();
    SENSITIVE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Copy of `env` with every sensitive key removed.
pub fn redacted(env: &EnvMap) -> EnvMap {
    env.iter()
        .filter(|(k, _)| !is_sensitive(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
