use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::profile::Profile;

/// Supported output encodings for a generated profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
    /// One height per line.
    Text,
    /// `index,height` rows under a header.
    Csv,
    /// The whole profile as JSON, clamp record included.
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "unknown export format: {} (expected text, csv or json)",
                other
            )),
        }
    }
}

/// Write the profile to `writer` in the given format.
pub fn export_profile<W: Write>(
    profile: &Profile,
    format: ExportFormat,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => {
            for height in &profile.heights {
                writeln!(writer, "{}", height)?;
            }
        }
        ExportFormat::Csv => {
            writeln!(writer, "index,height")?;
            for (index, height) in profile.heights.iter().enumerate() {
                writeln!(writer, "{},{}", index, height)?;
            }
        }
        ExportFormat::Json => {
            serde_json::to_writer(&mut *writer, profile)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

/// Write the profile to a file at `path`.
pub fn save_profile<P: AsRef<Path>>(
    profile: &Profile,
    format: ExportFormat,
    path: P,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    export_profile(profile, format, &mut file)
}
