//! Emberly Logo - generator for the Emberly brand asset suite
//!
//! Renders the symbol, wordmark, lockups and app icons as SVG from a fixed
//! palette and geometry, writes them to a directory and bundles them into a
//! ZIP archive.
//!
//! # Example
//!
//! ```rust
//! use emberly_logo::{render_assets, Palette, SvgConfig};
//!
//! let assets = render_assets(&Palette::default(), &SvgConfig::default());
//! assert_eq!(assets.len(), 7);
//! assert!(assets.get("emberly-symbol.svg").unwrap().content.contains("<svg"));
//! ```

pub mod assets;
pub mod error;
pub mod logging;
pub mod output;
pub mod palette;
pub mod renderer;

pub use assets::{render_assets, Asset, AssetKind, AssetSet, BRAND_NAME};
pub use error::GenerateError;
pub use output::{validate_archive_name, write_archive, write_assets};
pub use palette::{Palette, PaletteError};
pub use renderer::SvgConfig;

use std::path::{Path, PathBuf};

use log::info;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "emberly_logo";

/// Default archive file name, created inside the output directory
pub const DEFAULT_ARCHIVE_NAME: &str = "emberly-logo-suite.zip";

/// Configuration for a complete generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory the assets and archive are written to
    pub output_dir: PathBuf,
    /// Archive file name inside `output_dir`
    pub archive_name: String,
    /// Whether to bundle the written files into an archive
    pub archive: bool,
    /// Brand colors
    pub palette: Palette,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            archive: true,
            palette: Palette::default(),
            svg: SvgConfig::default(),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the archive file name
    pub fn with_archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = name.into();
        self
    }

    /// Enable or disable the archive step
    pub fn with_archive(mut self, archive: bool) -> Self {
        self.archive = archive;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Paths of the written SVG files, in output order
    pub files: Vec<PathBuf>,
    /// Path of the archive, if one was written
    pub archive: Option<PathBuf>,
}

impl GenerateReport {
    /// Bare file names of the written assets
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

/// Render, write and archive the full asset suite
///
/// Runs in a single pass and stops at the first I/O failure. Files written
/// before the failure are left in place. An unusable archive name is
/// rejected before anything is written.
///
/// # Example
///
/// ```no_run
/// use emberly_logo::{generate, GenerateConfig};
///
/// let report = generate(&GenerateConfig::new().with_output_dir("out")).unwrap();
/// assert_eq!(report.files.len(), 7);
/// ```
pub fn generate(config: &GenerateConfig) -> Result<GenerateReport, GenerateError> {
    info!("Using colors: {}", config.palette);

    let assets = render_assets(&config.palette, &config.svg);
    if config.archive {
        validate_archive_name(&assets, &config.archive_name)?;
    }
    let files = write_assets(&assets, &config.output_dir)?;

    let archive = if config.archive {
        Some(write_archive(&assets, &config.output_dir, &config.archive_name)?)
    } else {
        None
    };

    Ok(GenerateReport { files, archive })
}

/// Generate with default configuration into `dir`
pub fn generate_into(dir: &Path) -> Result<GenerateReport, GenerateError> {
    generate(&GenerateConfig::new().with_output_dir(dir))
}
