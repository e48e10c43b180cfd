//! Emberly Logo CLI
//!
//! Usage:
//!   emberly-logo [OPTIONS] [OUT_DIR]
//!
//! Options:
//!   -p, --palette <FILE>  Palette overrides (TOML format)
//!   -l, --list            List asset file names and exit
//!   --no-archive          Write loose SVG files only
//!   --compact             Disable pretty-printing
//!   --no-comments         Omit SVG comments
//!   -v, --verbose         Log every file written
//!   -q, --quiet           Log errors only (--verbose wins)
//!   -h, --help            Print help

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use emberly_logo::{
    generate, logging, AssetKind, GenerateConfig, Palette, SvgConfig, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser)]
#[command(name = "emberly-logo")]
#[command(about = "Generate the Emberly logo SVG suite and its ZIP bundle")]
struct Cli {
    /// Output directory (created if missing)
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Palette overrides (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// List asset file names and exit without writing
    #[arg(short, long)]
    list: bool,

    /// Write loose SVG files only, without the ZIP archive
    #[arg(long)]
    no_archive: bool,

    /// Disable pretty-printing of the SVG output
    #[arg(long)]
    compact: bool,

    /// Omit descriptive SVG comments
    #[arg(long)]
    no_comments: bool,

    /// Log every file written
    #[arg(short, long)]
    verbose: bool,

    /// Log errors only (ignored with --verbose)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for kind in AssetKind::ALL {
            println!("{}", kind.file_name());
        }
        return;
    }

    logging::init(logging::level_from_flags(cli.verbose, cli.quiet));

    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

    let config = GenerateConfig::new()
        .with_output_dir(&cli.out_dir)
        .with_archive(!cli.no_archive)
        .with_palette(palette)
        .with_svg(
            SvgConfig::new()
                .with_pretty_print(!cli.compact)
                .with_comments(!cli.no_comments),
        );

    match generate(&config) {
        Ok(report) => {
            if let Some(archive) = &report.archive {
                println!("{}", archive.display());
            }
            for name in report.file_names() {
                println!("  {}", name);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
