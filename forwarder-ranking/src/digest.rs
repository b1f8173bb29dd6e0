use std::fmt;

use candidate_ranking::Normalized;
use chrono::{DateTime, Utc};
use sha2::{Digest as _, Sha256};

/// Short label distinguishing results within one evaluation. It is derived from the evaluation
/// timestamp, so identical inputs ranked at different times get different digests. This is a run
/// identifier, not a content hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 8]);

impl Digest {
    /// First 8 bytes of `SHA-256("{name}-{score}-{evaluated_at as RFC 3339}")`.
    pub fn new(name: &str, score: Normalized, evaluated_at: DateTime<Utc>) -> Self {
        let hash = Sha256::digest(format!("{name}-{score}-{}", evaluated_at.to_rfc3339()));
        let mut bytes = [0; 8];
        bytes.copy_from_slice(&hash[..8]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use candidate_ranking::Normalized;
    use chrono::{DateTime, Duration, Utc};

    use super::Digest;

    fn evaluated_at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn sixteen_hex_characters() {
        let digest = Digest::new("Kuehne + Nagel", Normalized::HALF, evaluated_at());
        let text = digest.to_string();
        assert_eq!(text.len(), 16);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(format!("{digest:?}"), text);
    }

    #[test]
    fn pinned_timestamp_is_reproducible() {
        let a = Digest::new("DHL Express", Normalized::new(0.44).unwrap(), evaluated_at());
        let b = Digest::new("DHL Express", Normalized::new(0.44).unwrap(), evaluated_at());
        assert_eq!(a, b);
    }

    #[test]
    fn inputs_change_digest() {
        let base = Digest::new("DHL Express", Normalized::new(0.44).unwrap(), evaluated_at());
        let later = Digest::new(
            "DHL Express",
            Normalized::new(0.44).unwrap(),
            evaluated_at() + Duration::milliseconds(1),
        );
        let renamed = Digest::new("DHL", Normalized::new(0.44).unwrap(), evaluated_at());
        let rescored = Digest::new("DHL Express", Normalized::new(0.45).unwrap(), evaluated_at());
        assert_ne!(base, later);
        assert_ne!(base, renamed);
        assert_ne!(base, rescored);
    }
}
