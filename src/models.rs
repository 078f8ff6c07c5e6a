use std::str::FromStr;

use serde::Deserialize;

/// One evaluated piece of third-party content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicenseRecord {
    pub id: String,
    pub status: Status,
    /// Declared SPDX expression, when the evaluator knew one.
    #[serde(default)]
    pub license: Option<String>,
    /// Who vetted the license (e.g. `clearlydefined`).
    #[serde(default)]
    pub authority: Option<String>,
}

impl LicenseRecord {
    pub fn new(id: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            status,
            license: None,
            authority: None,
        }
    }

    pub fn needs_review(&self) -> bool {
        self.status.needs_review()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Approved,
    Restricted,
    Rejected,
    Unknown,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Approved,
        Status::Restricted,
        Status::Rejected,
        Status::Unknown,
    ];

    /// Everything except `Approved` goes to a human.
    pub fn needs_review(self) -> bool {
        self != Status::Approved
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Approved => write!(f, "approved"),
            Status::Restricted => write!(f, "restricted"),
            Status::Rejected => write!(f, "rejected"),
            Status::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approved" => Ok(Status::Approved),
            "restricted" => Ok(Status::Restricted),
            "rejected" => Ok(Status::Rejected),
            "unknown" => Ok(Status::Unknown),
            other => anyhow::bail!("unrecognised license status '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_approved_skips_review() {
        for status in Status::ALL {
            assert_eq!(status.needs_review(), status != Status::Approved);
        }
    }

    #[test]
    fn test_parse_status_case_insensitive() {
        assert_eq!("Approved".parse::<Status>().unwrap(), Status::Approved);
        assert_eq!(" RESTRICTED ".parse::<Status>().unwrap(), Status::Restricted);
        assert!("pending".parse::<Status>().is_err());
    }

    #[test]
    fn test_deserialize_record_without_optional_fields() {
        let record: LicenseRecord =
            serde_json::from_str(r#"{"id": "npm/npmjs/-/left-pad/1.3.0", "status": "rejected"}"#)
                .unwrap();
        assert_eq!(record, LicenseRecord::new("npm/npmjs/-/left-pad/1.3.0", Status::Rejected));
    }
}
