//! Corpus layout constants and runtime configuration defaults

// IDX file layout, as published with the MNIST corpus
/// Magic number opening an IDX file of unsigned-byte 3-D image data
pub const IDX_IMAGES_MAGIC: u32 = 0x0000_0803;
/// Magic number opening an IDX file of unsigned-byte 1-D label data
pub const IDX_LABELS_MAGIC: u32 = 0x0000_0801;
/// Bytes taken by the image header: magic, count, rows, cols
pub const IDX_IMAGES_HEADER_LEN: usize = 16;
/// Bytes taken by the label header: magic, count
pub const IDX_LABELS_HEADER_LEN: usize = 8;

/// Number of distinct digit labels
pub const DIGIT_CLASSES: usize = 10;
/// Largest raw pixel value, used to normalize glyphs into [0, 1]
pub const PIXEL_MAX: f32 = 255.0;

// Thresholds above which the uncapped spacing searches log a warning
/// Composition count beyond which random selection warns before enumerating
pub const COMPOSITION_WARN_THRESHOLD: u128 = 1_000_000;
/// Dirichlet rejection attempts after which a single warning is logged
pub const DIRICHLET_WARN_ATTEMPTS: usize = 100_000;

// Progress bar display settings
/// Output count above which a progress bar is shown
pub const PROGRESS_BAR_THRESHOLD: usize = 1;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default IDX image file
pub const DEFAULT_IMAGES_PATH: &str = "data/train-images.idx3-ubyte";
/// Default IDX label file
pub const DEFAULT_LABELS_PATH: &str = "data/train-labels.idx1-ubyte";
/// Default number of images generated per invocation
pub const DEFAULT_OUTPUT_COUNT: usize = 1;
/// Default directory receiving generated images
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Log filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "digitseq=warn";
/// Log filter applied with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "digitseq=debug";
