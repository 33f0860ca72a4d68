//! pdfjam invocation
//!
//! pdfjam places the pages; this module only builds its argument vector and
//! reports how the process ended. Failures are not retried since the same
//! arguments fail the same way.

use crate::constants::{DEFAULT_NUP, DEFAULT_PDFJAM_PROGRAM};
use crate::geometry::SheetGeometry;
use crate::types::*;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info};

/// Captured output of a successful renderer run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RendererOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A single pdfjam run
#[derive(Debug, Clone, PartialEq)]
pub struct PdfjamCommand {
    program: PathBuf,
    input: PathBuf,
    output: PathBuf,
    page_list: String,
    nup: String,
    paper: PaperSpec,
    sheet: SheetGeometry,
}

impl PdfjamCommand {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        page_list: impl Into<String>,
        sheet: SheetGeometry,
    ) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PDFJAM_PROGRAM),
            input: input.into(),
            output: output.into(),
            page_list: page_list.into(),
            nup: DEFAULT_NUP.to_string(),
            paper: PaperSpec::Derived,
            sheet,
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_nup(mut self, nup: impl Into<String>) -> Self {
        self.nup = nup.into();
        self
    }

    pub fn with_paper(mut self, paper: PaperSpec) -> Self {
        self.paper = paper;
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Arguments in the order pdfjam expects: input and page selection first,
    /// then layout options, output file, and orientation last.
    pub fn args(&self) -> Vec<OsString> {
        let (paper_flag, paper_value) = match &self.paper {
            PaperSpec::Derived => ("--papersize", self.sheet.papersize_arg()),
            PaperSpec::Named(name) => ("--paper", name.clone()),
        };

        vec![
            self.input.clone().into_os_string(),
            self.page_list.clone().into(),
            "--nup".into(),
            self.nup.clone().into(),
            paper_flag.into(),
            paper_value.into(),
            "--outfile".into(),
            self.output.clone().into_os_string(),
            self.sheet.orientation.pdfjam_flag().into(),
        ]
    }

    /// Human-readable command line, for logs
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args())
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run pdfjam and wait for it to exit.
    ///
    /// A non-zero exit becomes [`BookletError::Renderer`] carrying the exit
    /// status and the captured stderr unchanged. Processes killed by a
    /// signal report status `-1`.
    pub async fn run(&self) -> Result<RendererOutput> {
        info!("Running command: {}", self.command_line());

        let output = tokio::process::Command::new(&self.program)
            .args(self.args())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let status = output.status.code().unwrap_or(-1);
            debug!(status, %stderr, "Renderer failed");
            return Err(BookletError::Renderer { status, stderr });
        }

        info!(output = %self.output.display(), "Renderer finished");
        Ok(RendererOutput { stdout, stderr })
    }
}
