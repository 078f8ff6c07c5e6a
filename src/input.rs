//! Reads evaluated license records from a file or stdin.
//!
//! Two formats are understood:
//! - `json`: an array of `{ "id", "status", "license"?, "authority"? }` objects.
//! - `summary`: one `id, license, status, authority` line per record, as
//!   emitted by license checking tools.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{LicenseRecord, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Summary,
}

impl InputFormat {
    /// `.json` files are JSON; everything else, stdin included, is summary lines.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Summary,
        }
    }
}

/// Read every record from `path`, where `-` means stdin.
pub fn read_records(path: &Path, format: Option<InputFormat>) -> Result<Vec<LicenseRecord>> {
    let format = format.unwrap_or_else(|| InputFormat::detect(path));

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading records from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading records from {}", path.display()))?
    };

    parse_records(&content, format)
}

pub fn parse_records(content: &str, format: InputFormat) -> Result<Vec<LicenseRecord>> {
    match format {
        InputFormat::Json => {
            let records: Vec<LicenseRecord> =
                serde_json::from_str(content).context("parsing JSON license records")?;
            for (idx, record) in records.iter().enumerate() {
                check_id(&record.id).with_context(|| format!("record {}", idx + 1))?;
            }
            Ok(records)
        }
        InputFormat::Summary => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                parse_summary_line(line).with_context(|| format!("line {}", idx + 1))
            })
            .collect(),
    }
}

/// Parse `id, license, status, authority`. Authority may be omitted.
fn parse_summary_line(line: &str) -> Result<LicenseRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        anyhow::bail!(
            "expected 'id, license, status, authority', found {} field(s)",
            fields.len()
        );
    }

    let id = fields[0];
    check_id(id)?;

    let license = match fields[1] {
        "" => None,
        l if l.eq_ignore_ascii_case("unknown") => None,
        l => Some(l.to_string()),
    };

    let status: Status = fields[2].parse()?;

    let authority = fields
        .get(3)
        .filter(|a| !a.is_empty())
        .map(|a| a.to_string());

    Ok(LicenseRecord {
        id: id.to_string(),
        status,
        license,
        authority,
    })
}

/// Every report lists identifiers one per line, so a blank one would vanish.
fn check_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        anyhow::bail!("missing content identifier");
    }
    Ok(())
}
