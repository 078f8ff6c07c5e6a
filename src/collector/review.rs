use std::io::Write;

use crate::models::LicenseRecord;
use crate::review::ReviewRequestService;

use super::{CollectorError, NeedsReview, ResultSink};

/// Hands the records that need review to a [`ReviewRequestService`] on close.
///
/// Records reach the service in the order they were accepted. The service
/// gets the output stream for its own trace; the collector only flushes it.
pub struct ReviewRequestCollector<'a, S: ?Sized, W: Write + ?Sized> {
    service: &'a S,
    output: &'a mut W,
    needs_review: NeedsReview,
}

impl<'a, S, W> ReviewRequestCollector<'a, S, W>
where
    S: ReviewRequestService + ?Sized,
    W: Write + ?Sized,
{
    pub fn new(service: &'a S, output: &'a mut W) -> Self {
        Self {
            service,
            output,
            needs_review: NeedsReview::default(),
        }
    }
}

impl<S, W> ResultSink for ReviewRequestCollector<'_, S, W>
where
    S: ReviewRequestService + ?Sized,
    W: Write + ?Sized,
{
    fn accept(&mut self, record: LicenseRecord) -> Result<(), CollectorError> {
        self.needs_review.accept(record)
    }

    fn close(&mut self) -> Result<(), CollectorError> {
        if !self.needs_review.begin_close() {
            return Ok(());
        }

        if !self.needs_review.is_empty() {
            let submitted = self
                .service
                .create_reviews(&self.needs_review.records, &mut self.output);
            if let Err(err) = submitted {
                // Keep whatever trace the service managed to write.
                if let Err(flush_err) = self.output.flush() {
                    tracing::warn!(error = %flush_err, "failed to flush review output");
                }
                tracing::error!(error = %err, unsubmitted = err.unsubmitted().len(), "review requests failed");
                return Err(err.into());
            }
            tracing::info!(requested = self.needs_review.len(), "review requests created");
        }

        self.output.flush()?;
        Ok(())
    }

    fn status(&self) -> usize {
        self.needs_review.len()
    }
}
