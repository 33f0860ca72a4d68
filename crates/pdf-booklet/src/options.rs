use crate::constants::{DEFAULT_NUP, DEFAULT_PAGES_PER_SIGNATURE, DEFAULT_PDFJAM_PROGRAM};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Files
    pub input_file: PathBuf,
    pub output_file: PathBuf,

    // Page order
    pub pages_per_signature: usize,
    pub duplex: DuplexMode,

    // Renderer
    /// pdfjam `--nup` layout, columns x rows
    pub nup: String,
    pub paper: PaperSpec,
    pub pdfjam_program: PathBuf,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            output_file: PathBuf::new(),
            pages_per_signature: DEFAULT_PAGES_PER_SIGNATURE,
            duplex: DuplexMode::Manual,
            nup: DEFAULT_NUP.to_string(),
            paper: PaperSpec::Derived,
            pdfjam_program: PathBuf::from(DEFAULT_PDFJAM_PROGRAM),
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(BookletError::Config("No input file specified".to_string()));
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(BookletError::Config("No output file specified".to_string()));
        }

        if self.pages_per_signature == 0 {
            return Err(BookletError::Config(
                "Pages per signature must be positive".to_string(),
            ));
        }

        parse_nup(&self.nup)?;

        if matches!(&self.paper, PaperSpec::Named(name) if name.trim().is_empty()) {
            return Err(BookletError::Config("Paper name is empty".to_string()));
        }

        Ok(())
    }
}

/// Parse an `NxM` layout into (columns, rows)
pub fn parse_nup(nup: &str) -> Result<(usize, usize)> {
    let invalid = || BookletError::Config(format!("Invalid nup layout '{}', expected NxM", nup));

    let (cols, rows) = nup.split_once('x').ok_or_else(invalid)?;
    let cols: usize = cols.parse().map_err(|_| invalid())?;
    let rows: usize = rows.parse().map_err(|_| invalid())?;

    if cols == 0 || rows == 0 {
        return Err(invalid());
    }
    Ok((cols, rows))
}
