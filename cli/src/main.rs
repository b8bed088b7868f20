//! pagewright CLI - static landing page builder

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagewright::site::{DirSource, PageOutcome, PageSpec, SiteBuilder, SiteConfig};
use pagewright::{parse_file, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(version)]
#[command(about = "Build static landing pages from labelled text content", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every page listed in the site configuration
    Build {
        /// Site configuration file
        #[arg(short, long, value_name = "FILE", default_value = "site.toml", env = "PAGEWRIGHT_CONFIG")]
        config: PathBuf,

        /// Output directory (overrides the configuration)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Build pages one at a time
        #[arg(long)]
        sequential: bool,

        /// Write a JSON build report to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Render a local content file to HTML
    Render {
        /// Content text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap the body in the built-in page template
        #[arg(long)]
        full: bool,
    },

    /// Dump a parsed content file as JSON
    Json {
        /// Content text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Content text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Some(Commands::Build {
            config,
            output,
            sequential,
            report,
        }) => cmd_build(&config, output, sequential, report.as_deref()),
        Some(Commands::Render {
            input,
            output,
            full,
        }) => cmd_render(&input, output.as_deref(), full),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pagewright <COMMAND>".yellow());
            println!("       pagewright --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(
    config_path: &Path,
    output: Option<PathBuf>,
    sequential: bool,
    report_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SiteConfig::load_from_path(config_path)?;
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    log::debug!(
        "Loaded {} pages from {}",
        config.pages.len(),
        config_path.display()
    );

    let mut builder = SiteBuilder::new(config)?;
    if sequential {
        builder = builder.sequential();
    }

    let pb = ProgressBar::new(builder.config().pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = builder.build_with_progress(|outcome| {
        pb.set_message(outcome.path().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    for outcome in &report.pages {
        match outcome {
            PageOutcome::Written { output, .. } => {
                println!("  {} {}", "Wrote".green(), output.display());
            }
            PageOutcome::Skipped { path, error } => {
                println!("  {} {}: {}", "Skipped".red(), path, error.dimmed());
            }
        }
    }

    let stats = report.total_stats();
    println!();
    println!(
        "{} {} written, {} skipped ({} sections, {} FAQs)",
        "Done!".green().bold(),
        report.written(),
        report.failed(),
        stats.section_count,
        stats.faq_count
    );

    if let Some(path) = report_path {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("{} {}", "Report saved to".green(), path.display());
    }

    if report.failed() > 0 {
        return Err(format!("{} page(s) failed to build", report.failed()).into());
    }
    Ok(())
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    full: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = if full {
        let file = input
            .file_name()
            .ok_or("input is not a file")?
            .to_string_lossy()
            .to_string();
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let dir = input.parent().unwrap_or_else(|| Path::new("."));

        let page = PageSpec::new(format!("/{}", stem), file);
        let builder = SiteBuilder::with_source(SiteConfig::default(), Arc::new(DirSource::new(dir)));
        builder.build_page(&page)?.html
    } else {
        let doc = parse_file(input)?;
        pagewright::render::to_html(&doc, &RenderOptions::default())
    };

    write_or_print(output, &html)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = pagewright::render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let result = pagewright::render::to_html_with_stats(&doc, &RenderOptions::default());

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if doc.is_empty() {
        println!(
            "{}",
            "No content found (missing ENHANCED BODY CONTENT: marker?)".yellow()
        );
        return Ok(());
    }
    if !doc.h1.is_empty() {
        println!("{}: {}", "H1".bold(), doc.h1);
    }
    if !doc.meta_description.is_empty() {
        println!("{}: {}", "Meta".bold(), doc.meta_description);
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (i, section) in doc.sections.iter().enumerate() {
        println!("{:>3}. {}", i + 1, section.heading);
    }

    let stats = result.stats;
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Checklist items".bold(), stats.plus_bullet_count);
    println!("{}: {}", "Insights".bold(), stats.insight_count);
    println!("{}: {}", "FAQs rendered".bold(), stats.faq_count);
    if stats.skipped_faq_count > 0 {
        println!(
            "{}: {}",
            "FAQs without answer".bold(),
            stats.skipped_faq_count.to_string().yellow()
        );
    }
    println!("{}: {}", "Words".bold(), doc.plain_text().split_whitespace().count());

    Ok(())
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagewright".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Static landing page builder");
    println!();
    println!("License: MIT");
}
