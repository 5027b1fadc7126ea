//! docstruct CLI - document structure reconstruction tool
//!
//! Reads a parsed page layout (JSON produced by an upstream layout parser)
//! and writes the reconstructed content stream as JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docstruct::{
    AssembleOptions, Docstruct, DocumentLayout, DocumentResult, JsonFormat,
};

#[derive(Parser)]
#[command(name = "docstruct")]
#[command(version)]
#[command(about = "Reconstruct document structure from a parsed page layout", long_about = None)]
struct Cli {
    /// Input layout JSON file
    #[arg(value_name = "LAYOUT")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Size-threshold tolerance in points
    #[arg(long, default_value = "0.5")]
    tolerance: f32,

    /// Disable parallel page assembly
    #[arg(long)]
    sequential: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct structure and write result JSON
    Convert {
        /// Input layout JSON file
        #[arg(value_name = "LAYOUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Size-threshold tolerance in points
        #[arg(long, default_value = "0.5")]
        tolerance: f32,

        /// Disable parallel page assembly
        #[arg(long)]
        sequential: bool,
    },

    /// Show layout and result statistics without writing output
    Info {
        /// Input layout JSON file
        #[arg(value_name = "LAYOUT")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            compact,
            tolerance,
            sequential,
        }) => convert(&input, output.as_deref(), compact, tolerance, sequential),
        Some(Commands::Info { input }) => info(&input),
        None => match cli.input {
            Some(input) => convert(
                &input,
                cli.output.as_deref(),
                cli.compact,
                cli.tolerance,
                cli.sequential,
            ),
            None => {
                eprintln!("{} no input file given (see --help)", "error:".red().bold());
                process::exit(2);
            }
        },
    };

    if let Err(e) = outcome {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

/// Read and deserialize the layout file. Failure here is the one fatal path.
fn read_layout(input: &Path) -> docstruct::Result<DocumentLayout> {
    let data = fs::read_to_string(input)?;
    serde_json::from_str(&data)
        .map_err(|e| docstruct::Error::Layout(format!("{}: {}", input.display(), e)))
}

fn run_assembly(layout: &DocumentLayout, tolerance: f32, sequential: bool) -> DocumentResult {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("assembling {} pages", layout.page_count()));

    let mut builder = Docstruct::new().with_tolerance(tolerance);
    if sequential {
        builder = builder.sequential();
    }
    let result = builder.assemble(layout);

    spinner.finish_and_clear();
    result
}

fn convert(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    tolerance: f32,
    sequential: bool,
) -> docstruct::Result<()> {
    let layout = read_layout(input)?;
    log::debug!(
        "loaded layout: {} pages from {}",
        layout.page_count(),
        input.display()
    );

    let result = run_assembly(&layout, tolerance, sequential);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = docstruct::to_json(&result, format)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!(
                "{} {} pages -> {}",
                "done:".green().bold(),
                result.page_count(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn info(input: &Path) -> docstruct::Result<()> {
    let layout = read_layout(input)?;
    let result = run_assembly(&layout, AssembleOptions::default().tolerance, false);

    let mut headings = 0usize;
    let mut paragraphs = 0usize;
    let mut charts = 0usize;
    let mut tables = 0usize;
    for page in &result.pages {
        for item in &page.content {
            match item {
                i if i.is_heading() => headings += 1,
                i if i.is_paragraph() => paragraphs += 1,
                i if i.is_chart() => charts += 1,
                _ => tables += 1,
            }
        }
    }

    println!("{}", "Layout".bold());
    println!("  file:       {}", input.display());
    println!("  pages:      {}", layout.page_count());
    println!("{}", "Reconstructed content".bold());
    println!("  headings:   {}", headings);
    println!("  paragraphs: {}", paragraphs);
    println!("  charts:     {}", charts);
    println!("  tables:     {}", tables);

    Ok(())
}
