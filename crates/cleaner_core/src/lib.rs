//! Core of the dataset cleaner: find images, step through them, trash the bad ones.

pub mod config;
pub mod display;
pub mod disposal;
pub mod scan;
pub mod session;

pub use config::{CleanerConfig, QuickAccessError};
pub use display::{DecodeError, Viewport, decode_for_display, fit_within};
pub use disposal::{DisposeError, Disposer, SystemTrash};
pub use scan::{ImageSet, SUPPORTED_EXTENSIONS, ScanError, is_supported_image, scan_folder};
pub use session::{LoadOutcome, Position, ReviewSession, ReviewState, SkippedImage, Viewable};
