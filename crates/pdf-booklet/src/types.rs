use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Imposition order length {len} is not a multiple of 4")]
    UnalignedOrder { len: usize },
    #[error("Invalid page list: {0}")]
    PageList(String),
    #[error("Renderer exited with status {status}")]
    Renderer { status: i32, stderr: String },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    /// A page is landscape only when strictly wider than tall; square pages are portrait.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// Command-line switch pdfjam uses to select this orientation
    pub fn pdfjam_flag(self) -> &'static str {
        match self {
            Orientation::Portrait => "--portrait",
            Orientation::Landscape => "--landscape",
        }
    }
}

/// How the second side of each sheet gets printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplexMode {
    /// Printer has no duplex unit: print fronts, flip the stack, re-feed, print backs
    #[default]
    Manual,
    /// Printer duplexes on its own; the signature order is sent unchanged
    Automatic,
}

/// Output paper passed to the renderer
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSpec {
    /// Two source pages side by side, computed from the first page's MediaBox
    #[default]
    Derived,
    /// A named paper size understood by pdfjam (e.g. `a4paper`)
    Named(String),
}

/// Statistics about the booklet
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Padded slot count of each signature, in binding order
    pub pages_per_signature: Vec<usize>,
    /// Physical sheets of paper (four page slots each)
    pub output_sheets: usize,
    /// Printed sides (two per sheet)
    pub output_pages: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
}
