//! Photo URL candidates with extension fallback.

/// Tried in order when a photo fails to load.
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

#[inline]
pub fn photo_path(index: usize, ext: &str) -> String {
    format!("/photo{index}.{ext}")
}

/// Load state of one numbered photo (1-based index).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoSource {
    index: usize,
    attempt: usize,
}

impl PhotoSource {
    pub fn new(index: usize) -> Self {
        Self { index, attempt: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// URL to load now, or `None` once every extension has failed.
    pub fn current(&self) -> Option<String> {
        PHOTO_EXTENSIONS
            .get(self.attempt)
            .map(|ext| photo_path(self.index, ext))
    }

    /// Record a load failure and return the next URL to try. `None` means
    /// the element should be hidden.
    pub fn fail(&mut self) -> Option<String> {
        if self.attempt < PHOTO_EXTENSIONS.len() {
            self.attempt += 1;
        }
        self.current()
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempt >= PHOTO_EXTENSIONS.len()
    }
}

/// Sources for photos `1..=count`.
pub fn photo_set(count: usize) -> Vec<PhotoSource> {
    (1..=count).map(PhotoSource::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_extensions_then_gives_up() {
        let mut src = PhotoSource::new(3);
        assert_eq!(src.current().as_deref(), Some("/photo3.png"));
        assert_eq!(src.fail().as_deref(), Some("/photo3.jpg"));
        assert_eq!(src.fail().as_deref(), Some("/photo3.jpeg"));
        assert_eq!(src.fail().as_deref(), Some("/photo3.webp"));
        assert_eq!(src.fail(), None);
        assert!(src.is_exhausted());
        assert_eq!(src.fail(), None);
    }

    #[test]
    fn photo_set_is_one_based() {
        let set = photo_set(10);
        assert_eq!(set.len(), 10);
        assert_eq!(set[0].index(), 1);
        assert_eq!(set[9].current().as_deref(), Some("/photo10.png"));
    }
}
