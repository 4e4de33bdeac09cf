//! Review state: the loaded image set and the cursor walking it.

use crate::disposal::{DisposeError, Disposer};
use crate::scan::{ImageSet, ScanError, scan_folder};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    /// Nothing loaded yet, or the last load found no images.
    Idle,
    Loaded,
    /// Every image of the folder was disposed of.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    NoImages,
}

/// 1-based position for the counter label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.index, self.total)
    }
}

/// An image passed over because it could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedImage {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug)]
pub enum Viewable<T> {
    /// Nothing to show.
    Empty,
    Shown { image: T, skipped: Vec<SkippedImage> },
    /// A full pass found nothing decodable.
    NoneViewable { skipped: Vec<SkippedImage> },
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    images: ImageSet,
    cursor: usize,
    state: ReviewState,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            images: ImageSet::default(),
            cursor: 0,
            state: ReviewState::Idle,
        }
    }

    /// Replace the current set and start at its first image.
    pub fn load(&mut self, images: ImageSet) -> LoadOutcome {
        self.images = images;
        self.cursor = 0;
        if self.images.is_empty() {
            self.state = ReviewState::Idle;
            LoadOutcome::NoImages
        } else {
            self.state = ReviewState::Loaded;
            LoadOutcome::Loaded(self.images.len())
        }
    }

    pub fn load_folder(&mut self, root: impl AsRef<Path>) -> Result<LoadOutcome, ScanError> {
        let root = root.as_ref();
        let images = scan_folder(root)?;
        let outcome = self.load(images);
        tracing::info!("loaded {}: {:?}", root.display(), outcome);
        Ok(outcome)
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.cursor)
    }

    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.cursor)
    }

    pub fn advance(&mut self) {
        let n = self.images.len();
        if n > 0 {
            self.cursor = (self.cursor + 1) % n;
        }
    }

    pub fn retreat(&mut self) {
        let n = self.images.len();
        if n > 0 {
            self.cursor = (self.cursor + n - 1) % n;
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.cursor().map(|c| Position {
            index: c + 1,
            total: self.images.len(),
        })
    }

    /// Name of the folder holding the current image, used as its class.
    pub fn class_label(&self) -> Option<String> {
        self.current()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }

    pub fn file_name(&self) -> Option<String> {
        self.current()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Decode the current image, moving forward past failures.
    ///
    /// Gives up after one full pass so a folder of broken files cannot spin
    /// forever. The cursor stays on whichever image was shown, or where it
    /// started when nothing decoded.
    pub fn seek_viewable<T, E, F>(&mut self, mut decode: F) -> Viewable<T>
    where
        F: FnMut(&Path) -> Result<T, E>,
        E: fmt::Display,
    {
        let n = self.images.len();
        if n == 0 {
            return Viewable::Empty;
        }
        let mut skipped = Vec::new();
        for _ in 0..n {
            let Some(path) = self.images.get(self.cursor) else {
                break;
            };
            match decode(path) {
                Ok(image) => return Viewable::Shown { image, skipped },
                Err(e) => {
                    tracing::warn!("skipping {}: {e}", path.display());
                    skipped.push(SkippedImage {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    });
                    self.advance();
                }
            }
        }
        Viewable::NoneViewable { skipped }
    }

    /// Send the current image to `disposer` and drop it from the set.
    ///
    /// The cursor keeps its index, which now names the following image, and
    /// wraps to the start when the last entry was removed. On error nothing
    /// changes.
    pub fn dispose(&mut self, disposer: &impl Disposer) -> Result<PathBuf, DisposeError> {
        let path = self
            .current()
            .map(Path::to_path_buf)
            .ok_or(DisposeError::NothingSelected)?;
        disposer.dispose(&path)?;
        self.images.remove(self.cursor);
        if self.images.is_empty() {
            self.cursor = 0;
            self.state = ReviewState::Empty;
        } else if self.cursor >= self.images.len() {
            self.cursor = 0;
        }
        tracing::info!("moved {} to trash, {} left", path.display(), self.images.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        fail: bool,
        seen: RefCell<Vec<PathBuf>>,
    }

    impl Disposer for Recorder {
        fn dispose(&self, path: &Path) -> Result<(), DisposeError> {
            if self.fail {
                return Err(DisposeError::Trash {
                    path: path.to_path_buf(),
                    source: "read-only".into(),
                });
            }
            self.seen.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn session_of(names: &[&str]) -> ReviewSession {
        let mut s = ReviewSession::new();
        s.load(ImageSet::from_paths(names.iter().map(PathBuf::from).collect()));
        s
    }

    #[test]
    fn new_session_is_idle_and_inert() {
        let mut s = ReviewSession::new();
        s.advance();
        s.retreat();
        assert_eq!(s.state(), ReviewState::Idle);
        assert_eq!(s.cursor(), None);
        assert_eq!(s.current(), None);
        assert!(matches!(s.seek_viewable(|_| Ok::<_, String>(())), Viewable::Empty));
        assert!(matches!(
            s.dispose(&Recorder::default()),
            Err(DisposeError::NothingSelected)
        ));
    }

    #[test]
    fn loading_nothing_discards_previous_set() {
        let mut s = session_of(&["a.png", "b.png"]);
        assert_eq!(s.load(ImageSet::default()), LoadOutcome::NoImages);
        assert_eq!(s.state(), ReviewState::Idle);
        assert_eq!(s.position(), None);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(3, 0)]
    #[case(3, 2)]
    #[case(5, 4)]
    fn advance_and_retreat_are_inverse(#[case] n: usize, #[case] start: usize) {
        let names: Vec<String> = (0..n).map(|i| format!("{i}.png")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut s = session_of(&refs);
        for _ in 0..start {
            s.advance();
        }
        assert_eq!(s.cursor(), Some(start));
        s.advance();
        s.retreat();
        assert_eq!(s.cursor(), Some(start));
        s.retreat();
        s.advance();
        assert_eq!(s.cursor(), Some(start));
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut s = session_of(&["a.png", "b.png", "c.png"]);
        s.retreat();
        assert_eq!(s.current(), Some(Path::new("c.png")));
        s.advance();
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn labels_come_from_current_path() {
        let mut s = session_of(&["data/3/x.png", "data/4/y.png"]);
        s.advance();
        assert_eq!(s.class_label().as_deref(), Some("4"));
        assert_eq!(s.file_name().as_deref(), Some("y.png"));
        assert_eq!(s.position().map(|p| p.to_string()).as_deref(), Some("2 / 2"));
    }

    #[test]
    fn dispose_keeps_index_on_following_image() {
        let mut s = session_of(&["a.png", "b.png", "c.png"]);
        s.advance();
        let rec = Recorder::default();
        assert_eq!(s.dispose(&rec).unwrap(), PathBuf::from("b.png"));
        assert_eq!(s.len(), 2);
        assert_eq!(s.current(), Some(Path::new("c.png")));
        assert_eq!(s.images().position_of(Path::new("b.png")), None);
        assert_eq!(*rec.seen.borrow(), vec![PathBuf::from("b.png")]);
    }

    #[test]
    fn dispose_last_entry_wraps_to_start() {
        let mut s = session_of(&["a.png", "b.png"]);
        s.retreat();
        s.dispose(&Recorder::default()).unwrap();
        assert_eq!(s.cursor(), Some(0));
        assert_eq!(s.current(), Some(Path::new("a.png")));
    }

    #[test]
    fn draining_the_set_reaches_empty() {
        let mut s = session_of(&["a.png"]);
        s.dispose(&Recorder::default()).unwrap();
        assert_eq!(s.state(), ReviewState::Empty);
        assert_eq!(s.current(), None);
        s.advance();
        assert_eq!(s.cursor(), None);
    }

    #[test]
    fn failed_dispose_changes_nothing() {
        let mut s = session_of(&["a.png", "b.png"]);
        s.advance();
        let rec = Recorder {
            fail: true,
            ..Recorder::default()
        };
        assert!(matches!(s.dispose(&rec), Err(DisposeError::Trash { .. })));
        assert_eq!(s.len(), 2);
        assert_eq!(s.cursor(), Some(1));
        assert_eq!(s.state(), ReviewState::Loaded);
    }

    #[test]
    fn seek_skips_undecodable_images() {
        let mut s = session_of(&["a.png", "b.png", "c.png"]);
        let got = s.seek_viewable(|p| {
            if p == Path::new("c.png") {
                Ok(p.to_path_buf())
            } else {
                Err("corrupt")
            }
        });
        match got {
            Viewable::Shown { image, skipped } => {
                assert_eq!(image, PathBuf::from("c.png"));
                assert_eq!(skipped.len(), 2);
                assert_eq!(skipped[0].reason, "corrupt");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.cursor(), Some(2));
    }

    #[test]
    fn seek_stops_after_one_full_pass() {
        let mut s = session_of(&["a.png", "b.png", "c.png"]);
        s.advance();
        let mut calls = 0;
        let got = s.seek_viewable(|_| {
            calls += 1;
            Err::<(), _>("corrupt")
        });
        assert!(matches!(got, Viewable::NoneViewable { ref skipped } if skipped.len() == 3));
        assert_eq!(calls, 3);
        assert_eq!(s.cursor(), Some(1));
    }
}
