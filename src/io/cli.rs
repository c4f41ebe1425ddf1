//! Command-line interface for generating batches of digit sequence images

use crate::corpus::{GlyphSet, load_corpus};
use crate::generator::NumberSequenceGenerator;
use crate::io::configuration::{
    DEFAULT_IMAGES_PATH, DEFAULT_LABELS_PATH, DEFAULT_OUTPUT_COUNT, DEFAULT_OUTPUT_DIR,
    DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_digits, invalid_parameter};
use crate::io::image::export_sequence_as_png;
use crate::io::progress::ProgressManager;
use crate::spacing::{SpacingMethod, SpacingRange};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "digitseq")]
#[command(
    author,
    version,
    about = "Generate images of digit sequences with constrained spacing"
)]
/// Command-line arguments for the sequence generation tool
pub struct Cli {
    /// Digits to render, comma separated (e.g. 1,4,7)
    #[arg(value_name = "DIGITS")]
    pub digits: String,

    /// Minimum gap between neighbouring digits, in pixels
    #[arg(value_name = "MIN_SPACING")]
    pub min_spacing: usize,

    /// Maximum gap between neighbouring digits, in pixels
    #[arg(value_name = "MAX_SPACING")]
    pub max_spacing: usize,

    /// Total width of each generated image, in pixels
    #[arg(value_name = "IMAGE_WIDTH")]
    pub image_width: usize,

    /// Spacing calculation method
    #[arg(short, long, value_enum, default_value_t = SpacingMethod::Equidistant)]
    pub method: SpacingMethod,

    /// Number of sequence images to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_OUTPUT_COUNT)]
    pub count: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving the generated images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// IDX file holding the digit images
    #[arg(long, default_value = DEFAULT_IMAGES_PATH)]
    pub images: PathBuf,

    /// IDX file holding the digit labels
    #[arg(long, default_value = DEFAULT_LABELS_PATH)]
    pub labels: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging when `RUST_LOG` is unset
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the comma separated digit list
    ///
    /// # Errors
    ///
    /// Returns `InvalidDigitInput` if the list is empty or an entry is not a
    /// digit between 0 and 9
    pub fn digit_list(&self) -> Result<Vec<u8>> {
        let digits = self
            .digits
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .ok()
                    .filter(|&d| d <= 9)
                    .ok_or_else(|| {
                        invalid_digits(&format!(
                            "'{token}' is not a digit within the [0-9] range"
                        ))
                    })
            })
            .collect::<Result<Vec<u8>>>()?;

        if digits.is_empty() {
            return Err(invalid_digits(
                &"expected a number sequence, e.g. 1,2,3",
            ));
        }
        Ok(digits)
    }

    /// Parse the spacing bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpacingRange` if the minimum exceeds the maximum
    pub fn spacing_range(&self) -> Result<SpacingRange> {
        SpacingRange::new(self.min_spacing, self.max_spacing)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs a full generation batch described by the CLI arguments
pub struct SequenceRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SequenceRunner {
    /// Create a new runner from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested image, then write them all
    ///
    /// Nothing is written unless every image was generated successfully.
    /// Returns the paths of the written files.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, corpus loading, generation or
    /// export fails
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let digits = self.cli.digit_list()?;
        let spacing_range = self.cli.spacing_range()?;
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one image must be requested",
            ));
        }

        let corpus = load_corpus(&self.cli.images, &self.cli.labels)?;
        let glyphs = GlyphSet::new(corpus)?;
        let mut generator = NumberSequenceGenerator::new(glyphs, self.cli.method, self.cli.seed);

        let strips = (0..self.cli.count)
            .map(|_| generator.generate(&digits, spacing_range, self.cli.image_width))
            .collect::<Result<Vec<_>>>()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(strips.len());
        }

        let mut written = Vec::with_capacity(strips.len());
        for (index, strip) in strips.iter().enumerate() {
            let path = self.output_path(&digits, index);
            export_sequence_as_png(strip, &path)?;
            info!(path = %path.display(), "wrote sequence image");

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_image(&path.display().to_string());
            }
            written.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Output file for the `index`-th image of this run
    pub fn output_path(&self, digits: &[u8], index: usize) -> PathBuf {
        let label: String = digits.iter().map(u8::to_string).collect();
        self.cli
            .output
            .join(format!("{label}_{}_{index:04}.png", self.cli.seed))
    }
}
