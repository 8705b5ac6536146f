//! Record decoding errors.

use super::RECORD_LEN;

/// Error returned when a record is too short to hold every trip field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed record: got {len} bytes, need at least {}", RECORD_LEN)]
pub struct MalformedRecordError {
    len: usize,
}

impl MalformedRecordError {
    pub(super) fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the length of the rejected record.
    pub fn record_len(&self) -> usize {
        self.len
    }

    /// Returns the minimum record length.
    pub fn required(&self) -> usize {
        RECORD_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MalformedRecordError::new(10);
        assert_eq!(
            err.to_string(),
            "malformed record: got 10 bytes, need at least 36"
        );
    }

    #[test]
    fn accessors() {
        let err = MalformedRecordError::new(0);
        assert_eq!(err.record_len(), 0);
        assert_eq!(err.required(), 36);
    }
}
