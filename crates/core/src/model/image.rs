use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("Image reference cannot be empty.")]
    Empty,
}

/// Opaque reference to the prompt image of a question.
///
/// The quiz logic never opens the file; the rendering layer resolves it
/// against its own image root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    /// # Errors
    ///
    /// Returns `ImageRefError::Empty` for an empty or whitespace-only path.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ImageRefError> {
        let path = path.into();
        let blank = path
            .to_str()
            .map_or(path.as_os_str().is_empty(), |s| s.trim().is_empty());
        if blank {
            return Err(ImageRefError::Empty);
        }
        Ok(Self(path))
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve this reference against a base directory.
    ///
    /// Absolute references are returned unchanged.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        if self.0.is_absolute() {
            self.0.clone()
        } else {
            root.join(&self.0)
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_paths() {
        assert_eq!(ImageRef::new("").unwrap_err(), ImageRefError::Empty);
        assert_eq!(ImageRef::new("   ").unwrap_err(), ImageRefError::Empty);
    }

    #[test]
    fn resolves_relative_against_root() {
        let image = ImageRef::new("images/bayit.png").unwrap();
        assert_eq!(
            image.resolve(Path::new("/data")),
            PathBuf::from("/data/images/bayit.png")
        );
    }

    #[test]
    fn keeps_absolute_paths() {
        let image = ImageRef::new("/srv/images/sefer.png").unwrap();
        assert_eq!(
            image.resolve(Path::new("/data")),
            PathBuf::from("/srv/images/sefer.png")
        );
    }
}
