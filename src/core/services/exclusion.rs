//! Path exclusion filter
//!
//! Decides which files in a tree are module declaration candidates.
//! Pure path inspection, no I/O.

/// File name of a Go module declaration
pub const DECLARATION_FILE: &str = "go.mod";

/// Directory names that hide every module beneath them
pub const RESERVED_SEGMENTS: &[&str] = &["internal", "testdata"];

/// Filter over tree paths for a given declaration file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionFilter {
    declaration_file: &'static str,
    reserved: &'static [&'static str],
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(DECLARATION_FILE)
    }
}

impl ExclusionFilter {
    /// Create a filter accepting files named `declaration_file`
    #[must_use]
    pub const fn new(declaration_file: &'static str) -> Self {
        Self {
            declaration_file,
            reserved: RESERVED_SEGMENTS,
        }
    }

    /// Returns `true` if the file at `path` must not be parsed
    ///
    /// A file is excluded when:
    /// - its base name is not the declaration file name
    /// - its base name starts with `.` or `_`
    /// - any ancestor directory is a reserved segment, at any depth
    ///
    /// Only the base name is tested for the hidden prefixes, so with the
    /// default filter `.github/go.mod` and `_tools/go.mod` are kept. A
    /// whole-path check would drop both.
    #[must_use]
    pub fn should_exclude(&self, path: &str) -> bool {
        let (dir, base) = path.rsplit_once('/').unwrap_or(("", path));

        if base != self.declaration_file || base.starts_with('.') || base.starts_with('_') {
            return true;
        }

        dir.split('/')
            .filter(|segment| !segment.is_empty())
            .any(|segment| self.reserved.contains(&segment))
    }
}

/// [`ExclusionFilter::should_exclude`] for `go.mod` files
#[must_use]
pub fn should_exclude(path: &str) -> bool {
    ExclusionFilter::default().should_exclude(path)
}
