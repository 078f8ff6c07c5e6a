use std::io::Write;

use crate::models::LicenseRecord;

use super::{CollectorError, NeedsReview, ResultSink};

const ALL_VETTED: &str =
    "Vetted license information was found for all content. No further investigation is required.";
const HEADER: &str =
    "License information could not be automatically verified for the following content:";
const TRAILER: &str =
    "This content is either not correctly mapped by the system, or requires review.";

/// Writes a plain-text summary of the content that needs review.
///
/// Nothing is written until [`ResultSink::close`]; identifiers are then
/// listed in sorted order so repeated runs over the same input produce the
/// same report.
pub struct SummaryCollector<'a, W: Write + ?Sized> {
    output: &'a mut W,
    needs_review: NeedsReview,
}

impl<'a, W: Write + ?Sized> SummaryCollector<'a, W> {
    pub fn new(output: &'a mut W) -> Self {
        Self {
            output,
            needs_review: NeedsReview::default(),
        }
    }

    fn write_report(&mut self) -> std::io::Result<()> {
        if self.needs_review.is_empty() {
            writeln!(self.output, "{}", ALL_VETTED)?;
        } else {
            let mut ids: Vec<&str> = self
                .needs_review
                .records
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            ids.sort_unstable();

            writeln!(self.output, "{}", HEADER)?;
            writeln!(self.output)?;
            for id in ids {
                writeln!(self.output, "{}", id)?;
            }
            writeln!(self.output)?;
            writeln!(self.output, "{}", TRAILER)?;
            writeln!(self.output)?;
        }
        self.output.flush()
    }
}

impl<W: Write + ?Sized> ResultSink for SummaryCollector<'_, W> {
    fn accept(&mut self, record: LicenseRecord) -> Result<(), CollectorError> {
        self.needs_review.accept(record)
    }

    fn close(&mut self) -> Result<(), CollectorError> {
        if !self.needs_review.begin_close() {
            return Ok(());
        }
        self.write_report()?;
        tracing::info!(needs_review = self.needs_review.len(), "summary report written");
        Ok(())
    }

    fn status(&self) -> usize {
        self.needs_review.len()
    }
}
