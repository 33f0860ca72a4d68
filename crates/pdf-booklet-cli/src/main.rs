use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdf_booklet::{BookletError, BookletOptions, DuplexMode, PaperSpec, PdfjamCommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "booklet", about = "Booklet signature imposition via pdfjam", version)]
struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a PDF into 2-up booklet signatures
    Impose {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Page layout in format NxM
        #[arg(long)]
        nup: Option<String>,

        /// Named pdfjam paper size (default: two source pages side by side)
        #[arg(long)]
        paper: Option<String>,

        /// Pages per signature
        #[arg(long)]
        signature_size: Option<usize>,

        /// Printer duplexes on its own; skip the flip-and-refeed order
        #[arg(long)]
        duplex: bool,

        /// pdfjam executable
        #[arg(long)]
        pdfjam: Option<PathBuf>,

        /// JSON options file; command-line flags take precedence
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show statistics only, don't run pdfjam
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the page list for a page count
    Order {
        /// Number of source pages
        #[arg(short, long)]
        pages: usize,

        /// Pages per signature
        #[arg(long, default_value_t = pdf_booklet::constants::DEFAULT_PAGES_PER_SIGNATURE)]
        signature_size: usize,

        /// Printer duplexes on its own; skip the flip-and-refeed order
        #[arg(long)]
        duplex: bool,
    },
}

/// Mode selected by `--duplex`, or `None` to keep the configured one
fn duplex_override(duplex: bool) -> Option<DuplexMode> {
    duplex.then_some(DuplexMode::Automatic)
}

/// Run pdfjam, echoing the command line and its output.
///
/// Returns the exit status for the CLI: 0 on success, the renderer's own
/// status when it fails, with its stderr written to `err` unchanged.
async fn run_renderer(
    command: &PdfjamCommand,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32> {
    writeln!(out, "Running command: {}", command.command_line())?;

    match command.run().await {
        Ok(rendered) => {
            writeln!(out, "Success:")?;
            writeln!(out, "{}", rendered.stdout)?;
            Ok(0)
        }
        Err(BookletError::Renderer { status, stderr }) => {
            writeln!(err, "Error running pdfjam:")?;
            writeln!(err, "{stderr}")?;
            Ok(status)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_statistics(stats: &pdf_booklet::BookletStatistics) {
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Signatures: {}", stats.signatures);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Impose {
            input,
            output,
            nup,
            paper,
            signature_size,
            duplex,
            pdfjam,
            config,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => BookletOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => BookletOptions::default(),
            };

            options.input_file = input;
            options.output_file = output;
            if let Some(nup) = nup {
                options.nup = nup;
            }
            if let Some(paper) = paper {
                options.paper = PaperSpec::Named(paper);
            }
            if let Some(size) = signature_size {
                options.pages_per_signature = size;
            }
            if let Some(mode) = duplex_override(duplex) {
                options.duplex = mode;
            }
            if let Some(program) = pdfjam {
                options.pdfjam_program = program;
            }
            options.validate()?;

            let info = pdf_booklet::load_document_info(&options.input_file).await?;
            let stats =
                pdf_booklet::calculate_statistics(info.pages, options.pages_per_signature)?;
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            let plan = pdf_booklet::plan_booklet(info.pages, info.geometry, &options)?;
            let status = run_renderer(
                &plan.pdfjam_command(&options),
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )
            .await?;
            if status != 0 {
                std::process::exit(status);
            }
            println!("Booklet → {}", options.output_file.display());
        }

        Commands::Order {
            pages,
            signature_size,
            duplex,
        } => {
            let order = pdf_booklet::booklet_order(pages, signature_size)?;
            let order = match duplex_override(duplex).unwrap_or_default() {
                DuplexMode::Manual => pdf_booklet::reorder_for_manual_duplex(&order)?,
                DuplexMode::Automatic => order,
            };
            println!("{order}");
        }
    }

    Ok(())
}
