//! Result collectors: single-use sinks that consume license records and
//! report the ones needing manual review when closed.
//!
//! - [`summary`]: fixed plain-text report, identifiers sorted.
//! - [`review`]: hands the records to a [`crate::review::ReviewRequestService`].
//!
//! Both borrow their output stream. They flush it on close and never close it.

pub mod review;
pub mod summary;

use thiserror::Error;

use crate::models::LicenseRecord;
use crate::review::ServiceError;

pub use review::ReviewRequestCollector;
pub use summary::SummaryCollector;

/// The contract every collector satisfies.
///
/// `accept` is legal only while open. `close` writes the report once; calling
/// it again is a no-op. `status` may be read at any time and counts the
/// records that need review, whether or not close succeeded.
pub trait ResultSink {
    fn accept(&mut self, record: LicenseRecord) -> Result<(), CollectorError>;
    fn close(&mut self) -> Result<(), CollectorError>;
    fn status(&self) -> usize;
}

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("failed to write report")]
    Output(#[from] std::io::Error),

    #[error("review request service failed")]
    Service(#[from] ServiceError),

    #[error("record {id} accepted after the collector was closed")]
    Closed { id: String },
}

/// Records retained for review, in insertion order, plus the open/closed state
/// shared by every collector.
#[derive(Debug, Default)]
struct NeedsReview {
    records: Vec<LicenseRecord>,
    seen: usize,
    closed: bool,
}

impl NeedsReview {
    fn accept(&mut self, record: LicenseRecord) -> Result<(), CollectorError> {
        if self.closed {
            return Err(CollectorError::Closed { id: record.id });
        }
        self.seen += 1;
        if record.needs_review() {
            tracing::debug!(id = %record.id, status = %record.status, "retained for review");
            self.records.push(record);
        }
        Ok(())
    }

    /// Moves to the closed state. Returns `false` if already closed.
    fn begin_close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        tracing::debug!(
            accepted = self.seen,
            needs_review = self.records.len(),
            "closing collector"
        );
        true
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::{self, Write};

    use super::*;
    use crate::models::Status;

    /// Writer that records flushes and can be told to fail.
    #[derive(Default)]
    pub struct ProbeWriter {
        pub buf: Vec<u8>,
        pub flushes: usize,
        pub fail_writes: bool,
    }

    impl Write for ProbeWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_retains_only_non_approved_in_order() {
        let mut list = NeedsReview::default();
        list.accept(LicenseRecord::new("z@1", Status::Restricted)).unwrap();
        list.accept(LicenseRecord::new("a@2", Status::Approved)).unwrap();
        list.accept(LicenseRecord::new("m@3", Status::Rejected)).unwrap();

        let ids: Vec<_> = list.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["z@1", "m@3"]);
        assert_eq!(list.seen, 3);
    }

    #[test]
    fn test_accept_after_close_is_rejected() {
        let mut list = NeedsReview::default();
        assert!(list.begin_close());
        assert!(!list.begin_close());

        let err = list
            .accept(LicenseRecord::new("late@1", Status::Unknown))
            .unwrap_err();
        assert!(matches!(err, CollectorError::Closed { ref id } if id == "late@1"));
        assert_eq!(list.len(), 0);
    }
}
