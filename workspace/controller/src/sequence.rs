//! Request sequencing for fetches that can overlap.
//!
//! Browser fetches cannot be cancelled once issued, so two quick clicks may
//! resolve in either order. Every request of a class gets a token from that
//! class's [`RequestSequence`]; a response is applied only while its token is
//! still the newest one issued.

/// Identifies one issued request within its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest != 0 && token.0 == self.latest
    }

    pub fn latest(&self) -> Option<RequestToken> {
        (self.latest != 0).then_some(RequestToken(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_token_is_latest() {
        let mut sequence = RequestSequence::new();
        assert_eq!(sequence.latest(), None);

        let first = sequence.issue();
        assert!(sequence.is_latest(first));

        let second = sequence.issue();
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
        assert!(second > first);
        assert_eq!(sequence.latest(), Some(second));
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut records = RequestSequence::new();
        let mut prediction = RequestSequence::new();

        let r = records.issue();
        records.issue();
        let p = prediction.issue();

        assert!(!records.is_latest(r));
        assert!(prediction.is_latest(p));
    }
}
