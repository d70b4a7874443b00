// SPDX-License-Identifier: MPL-2.0
//! Feed value objects.
//!
//! These wrappers normalise raw input at construction time so that the UI
//! never has to re-validate: like counts are never negative and every image
//! reference has already been classified.

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// PostId
// =============================================================================

/// Stable identity of a post across data refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(u64);

impl PostId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// LikeCount
// =============================================================================

/// Number of likes on a comment, never negative.
///
/// # Example
///
/// ```
/// use iced_feed::domain::feed::LikeCount;
///
/// assert_eq!(LikeCount::from_signed(-4).value(), 0);
/// assert_eq!(LikeCount::from_signed(12).value(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LikeCount(u32);

impl LikeCount {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Builds a count from untrusted signed input.
    ///
    /// Negative values become zero; values above `u32::MAX` saturate.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LikeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ImageSource
// =============================================================================

/// Where an image comes from, resolved once when the record is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSource {
    /// An image file on disk.
    Local(PathBuf),
    /// A network URI. Fetching is not supported, so it renders as a placeholder.
    Remote(String),
    /// Missing or unresolvable reference; renders as a placeholder.
    #[default]
    Missing,
}

impl ImageSource {
    /// Classifies a raw image reference.
    ///
    /// - blank → `Missing`
    /// - `file://<path>` → `Local`
    /// - any other `<scheme>://...` → `Remote`
    /// - a path to an existing file → `Local`
    /// - anything else (e.g. `"post-image-url"`) → `Missing`
    #[must_use]
    pub fn from_uri(uri: &str) -> Self {
        let uri = uri.trim();
        if uri.is_empty() {
            return ImageSource::Missing;
        }
        if let Some(path) = uri.strip_prefix("file://") {
            return ImageSource::Local(PathBuf::from(path));
        }
        if uri.contains("://") {
            return ImageSource::Remote(uri.to_string());
        }

        let path = PathBuf::from(uri);
        if path.is_file() {
            ImageSource::Local(path)
        } else {
            ImageSource::Missing
        }
    }

    /// Returns the file path when the image can be rendered directly.
    #[must_use]
    pub fn local_path(&self) -> Option<&std::path::Path> {
        match self {
            ImageSource::Local(path) => Some(path),
            ImageSource::Remote(_) | ImageSource::Missing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_count_clamps_negative_to_zero() {
        assert_eq!(LikeCount::from_signed(-1), LikeCount::ZERO);
        assert_eq!(LikeCount::from_signed(i64::MIN), LikeCount::ZERO);
    }

    #[test]
    fn like_count_saturates_large_values() {
        assert_eq!(LikeCount::from_signed(i64::MAX).value(), u32::MAX);
    }

    #[test]
    fn like_count_defaults_to_zero() {
        assert_eq!(LikeCount::default(), LikeCount::ZERO);
    }

    #[test]
    fn blank_uri_is_missing() {
        assert_eq!(ImageSource::from_uri(""), ImageSource::Missing);
        assert_eq!(ImageSource::from_uri("  "), ImageSource::Missing);
    }

    #[test]
    fn file_scheme_is_local() {
        assert_eq!(
            ImageSource::from_uri("file:///tmp/cat.png"),
            ImageSource::Local(PathBuf::from("/tmp/cat.png"))
        );
    }

    #[test]
    fn network_scheme_is_remote() {
        let source = ImageSource::from_uri("https://example.com/a.jpg");
        assert_eq!(
            source,
            ImageSource::Remote("https://example.com/a.jpg".to_string())
        );
        assert!(source.local_path().is_none());
    }

    #[test]
    fn unresolvable_reference_is_missing() {
        assert_eq!(
            ImageSource::from_uri("post-image-url"),
            ImageSource::Missing
        );
    }

    #[test]
    fn existing_bare_path_is_local() {
        let file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        let path = file.path().to_string_lossy().into_owned();

        assert_eq!(
            ImageSource::from_uri(&path),
            ImageSource::Local(file.path().to_path_buf())
        );
    }

    #[test]
    fn post_id_displays_with_hash() {
        assert_eq!(PostId::new(3).to_string(), "#3");
    }
}
