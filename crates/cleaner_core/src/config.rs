//! Built-in settings: quick-access shortcuts and display fallbacks.

use crate::display::Viewport;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_QUICK_ACCESS_BASE: &str =
    "/Users/bypkt/clicknext/thai-handwriting-number/data/raw/thai-handwriting-number.appspot.com";
pub const DEFAULT_QUICK_ACCESS_SLOTS: usize = 10;

#[derive(Debug, Error)]
pub enum QuickAccessError {
    #[error("No quick-access folder in slot {0}")]
    UnknownSlot(usize),
    #[error("Folder not found:\n{}", .0.display())]
    Missing(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanerConfig {
    /// Root holding one numbered sub-folder per class.
    pub quick_access_base: PathBuf,
    pub quick_access_slots: usize,
    /// Used while the image area is too small to measure.
    pub fallback_viewport: Viewport,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            quick_access_base: PathBuf::from(DEFAULT_QUICK_ACCESS_BASE),
            quick_access_slots: DEFAULT_QUICK_ACCESS_SLOTS,
            fallback_viewport: Viewport::default(),
        }
    }
}

impl CleanerConfig {
    pub fn quick_path(&self, slot: usize) -> Option<PathBuf> {
        (slot < self.quick_access_slots).then(|| self.quick_access_base.join(slot.to_string()))
    }

    /// Resolves a shortcut to an existing folder.
    pub fn resolve_quick_access(&self, slot: usize) -> Result<PathBuf, QuickAccessError> {
        let path = self
            .quick_path(slot)
            .ok_or(QuickAccessError::UnknownSlot(slot))?;
        if !path.exists() {
            return Err(QuickAccessError::Missing(path));
        }
        Ok(path)
    }
}
