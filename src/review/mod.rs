//! Review-request services: whatever turns a list of records that need
//! review into tracked requests for the IP team.
//!
//! - [`markdown`] drafts one Markdown request per record onto the output stream.

pub mod markdown;

use std::io::Write;

use thiserror::Error;

use crate::models::LicenseRecord;

/// Creates review requests for records that could not be vetted automatically.
///
/// Implementations are blocking and self-contained. They are handed the
/// records in the order they were accepted and may write progress or summary
/// text to `output`.
pub trait ReviewRequestService {
    fn create_reviews(
        &self,
        records: &[LicenseRecord],
        output: &mut dyn Write,
    ) -> Result<(), ServiceError>;
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to write review output")]
    Output(#[from] std::io::Error),

    #[error("review request limit of {limit} reached; {} record(s) not submitted", .unsubmitted.len())]
    LimitExceeded {
        limit: usize,
        unsubmitted: Vec<String>,
    },

    #[error("review request for {id} was rejected: {reason}")]
    Rejected {
        id: String,
        reason: String,
        unsubmitted: Vec<String>,
    },
}

impl ServiceError {
    /// Identifiers of the records that did not get a review request.
    ///
    /// Empty for output failures, where the service cannot tell what the
    /// reader actually received.
    pub fn unsubmitted(&self) -> &[String] {
        match self {
            ServiceError::Output(_) => &[],
            ServiceError::LimitExceeded { unsubmitted, .. }
            | ServiceError::Rejected { unsubmitted, .. } => unsubmitted,
        }
    }
}
