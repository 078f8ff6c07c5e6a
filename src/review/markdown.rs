use std::io::Write;

use crate::config::ReviewConfig;
use crate::models::LicenseRecord;

use super::{ReviewRequestService, ServiceError};

/// Drafts review requests as Markdown, one section per record, suitable for
/// pasting into an issue tracker as the request description.
pub struct MarkdownReviewService {
    project: Option<String>,
    title_prefix: String,
    /// `0` disables the limit.
    max_requests: usize,
}

impl MarkdownReviewService {
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            project: config.project.clone(),
            title_prefix: config.title_prefix.clone(),
            max_requests: config.max_requests,
        }
    }

    fn draft(&self, record: &LicenseRecord, output: &mut dyn Write) -> std::io::Result<()> {
        writeln!(output, "## {}: {}", self.title_prefix, record.id)?;
        writeln!(output)?;
        if let Some(project) = &self.project {
            writeln!(output, "- Project: {}", project)?;
        }
        writeln!(
            output,
            "- Declared license: {}",
            record.license.as_deref().unwrap_or("unknown")
        )?;
        writeln!(output, "- Status: {}", record.status)?;
        if let Some(authority) = &record.authority {
            writeln!(output, "- Authority: {}", authority)?;
        }
        writeln!(output)?;
        Ok(())
    }
}

impl ReviewRequestService for MarkdownReviewService {
    fn create_reviews(
        &self,
        records: &[LicenseRecord],
        output: &mut dyn Write,
    ) -> Result<(), ServiceError> {
        let take = if self.max_requests == 0 {
            records.len()
        } else {
            records.len().min(self.max_requests)
        };
        let (drafted, pending) = records.split_at(take);

        for (idx, record) in drafted.iter().enumerate() {
            if record.id.contains(['\n', '\r']) {
                writeln!(output, "Drafted {} review request(s).", idx)?;
                return Err(ServiceError::Rejected {
                    id: record.id.clone(),
                    reason: "identifier spans multiple lines".to_string(),
                    unsubmitted: records[idx..].iter().map(|r| r.id.clone()).collect(),
                });
            }
            self.draft(record, output)?;
            tracing::info!(id = %record.id, status = %record.status, "drafted review request");
        }
        writeln!(output, "Drafted {} review request(s).", drafted.len())?;

        if pending.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            limit = self.max_requests,
            pending = pending.len(),
            "review request limit reached"
        );
        Err(ServiceError::LimitExceeded {
            limit: self.max_requests,
            unsubmitted: pending.iter().map(|r| r.id.clone()).collect(),
        })
    }
}
