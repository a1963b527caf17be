//! Breakpoint configuration for viewport delta scaling.
//!
//! A breakpoint is a reference resolution (width × height) acting as the
//! design baseline for one orientation. Specifiers use the form
//! `<orientation>@<width>x<height>`, e.g. `portrait@360x540`, where the
//! orientation is `portrait` or `landscape` and each dimension is a 3–6
//! digit unsigned decimal integer.

#![forbid(unsafe_code)]

use core::fmt;
use thiserror::Error;

/// Screen orientation, derived by the caller from comparing viewport
/// width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Both orientations, in validation and reporting order.
    pub const ALL: [Self; 2] = [Self::Portrait, Self::Landscape];

    /// The lowercase specifier word for this orientation.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A reference resolution for one orientation. Both dimensions are
/// guaranteed positive by the specifier grammar (3–6 digits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Breakpoint {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}x{}", self.width, self.height)
    }
}

/// Validation failures reported while building a [`ConfigTable`].
///
/// Validation order is fixed so error reporting is deterministic: absence
/// first, then per-item grammar in input order, then per-orientation
/// coverage in [`Orientation::ALL`] order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The specifier list was empty.
    #[error("breakpoint config is not defined")]
    Missing,
    /// An entry did not match `<orientation>@<width>x<height>`.
    #[error("invalid breakpoint specifier {0:?}")]
    InvalidItem(String),
    /// No entry was supplied for the named orientation.
    #[error("no breakpoint configured for {0} orientation")]
    OrientationMissing(Orientation),
}

/// Specifiers used when the caller supplies no configuration.
pub const DEFAULT_SPECIFIERS: [&str; 2] = ["portrait@360x540", "landscape@960x540"];

/// Immutable per-orientation breakpoint lookup table.
///
/// Built once from a specifier list; each orientation's breakpoints are
/// sorted ascending by width (stable, so equal widths keep input order)
/// and guaranteed non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigTable {
    portrait: Vec<Breakpoint>,
    landscape: Vec<Breakpoint>,
}

impl ConfigTable {
    /// Parse and validate a specifier list into a table.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] for an empty list,
    /// [`ConfigError::InvalidItem`] for the first malformed entry, or
    /// [`ConfigError::OrientationMissing`] when an orientation has no
    /// entry. A malformed entry is reported before orientation coverage
    /// is considered.
    pub fn parse<S: AsRef<str>>(specifiers: &[S]) -> Result<Self, ConfigError> {
        if specifiers.is_empty() {
            return Err(ConfigError::Missing);
        }

        let mut table = Self {
            portrait: Vec::new(),
            landscape: Vec::new(),
        };
        for specifier in specifiers {
            let item = specifier.as_ref();
            let Some((orientation, breakpoint)) = parse_specifier(item) else {
                return Err(ConfigError::InvalidItem(item.to_owned()));
            };
            match orientation {
                Orientation::Portrait => table.portrait.push(breakpoint),
                Orientation::Landscape => table.landscape.push(breakpoint),
            }
        }

        for orientation in Orientation::ALL {
            if table.breakpoints_for(orientation).is_empty() {
                return Err(ConfigError::OrientationMissing(orientation));
            }
        }

        // Stable sort keeps the input order of equal-width entries.
        table.portrait.sort_by_key(|breakpoint| breakpoint.width);
        table.landscape.sort_by_key(|breakpoint| breakpoint.width);
        Ok(table)
    }

    /// Breakpoints for an orientation, ascending by width. Non-empty for
    /// any table that survived construction.
    #[inline]
    pub fn breakpoints_for(&self, orientation: Orientation) -> &[Breakpoint] {
        match orientation {
            Orientation::Portrait => &self.portrait,
            Orientation::Landscape => &self.landscape,
        }
    }
}

impl Default for ConfigTable {
    /// The table produced by [`DEFAULT_SPECIFIERS`].
    #[inline]
    fn default() -> Self {
        Self {
            portrait: vec![Breakpoint {
                width: 360,
                height: 540,
            }],
            landscape: vec![Breakpoint {
                width: 960,
                height: 540,
            }],
        }
    }
}

/// Parse one `<orientation>@<width>x<height>` specifier. `None` on any
/// grammar violation; the caller owns error reporting.
fn parse_specifier(item: &str) -> Option<(Orientation, Breakpoint)> {
    let (orientation_text, size_text) = item.split_once('@')?;
    let orientation = match orientation_text {
        "portrait" => Orientation::Portrait,
        "landscape" => Orientation::Landscape,
        _ => return None,
    };
    let (width_text, height_text) = size_text.split_once('x')?;
    let width = parse_dimension(width_text)?;
    let height = parse_dimension(height_text)?;
    Some((orientation, Breakpoint { width, height }))
}

/// Parse a 3–6 digit unsigned decimal dimension. Rejects signs,
/// fractions, and out-of-range digit counts.
fn parse_dimension(text: &str) -> Option<u32> {
    if !(3..=6).contains(&text.len()) || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that each orientation's breakpoints come out ascending by width.
    ///
    /// # Errors
    /// Returns an error if parsing the specifier list fails.
    ///
    /// # Panics
    /// Panics if either orientation's result is out of order.
    #[test]
    fn test_sorted_ascending_by_width() -> Result<(), ConfigError> {
        let table = ConfigTable::parse(&[
            "portrait@500x540",
            "landscape@960x540",
            "portrait@360x540",
            "landscape@1920x1080",
        ])?;
        let widths: Vec<u32> = table
            .breakpoints_for(Orientation::Portrait)
            .iter()
            .map(|breakpoint| breakpoint.width)
            .collect();
        assert_eq!(widths, vec![360, 500]);
        let widths: Vec<u32> = table
            .breakpoints_for(Orientation::Landscape)
            .iter()
            .map(|breakpoint| breakpoint.width)
            .collect();
        assert_eq!(widths, vec![960, 1920]);
        Ok(())
    }

    /// Test that equal-width entries keep their input order.
    ///
    /// # Panics
    /// Panics if the stable-sort guarantee is violated.
    #[test]
    fn test_equal_widths_keep_input_order() {
        let result = ConfigTable::parse(&[
            "portrait@360x800",
            "portrait@360x540",
            "landscape@960x540",
        ]);
        assert_eq!(
            result.map(|table| table.breakpoints_for(Orientation::Portrait).to_vec()),
            Ok(vec![
                Breakpoint {
                    width: 360,
                    height: 800,
                },
                Breakpoint {
                    width: 360,
                    height: 540,
                },
            ])
        );
    }

    /// Test that an empty list fails as missing config.
    ///
    /// # Panics
    /// Panics if the error is not `Missing`.
    #[test]
    fn test_empty_list_is_missing() {
        let specifiers: [&str; 0] = [];
        assert_eq!(ConfigTable::parse(&specifiers), Err(ConfigError::Missing));
    }

    /// Test that a malformed entry is reported verbatim, even when a later
    /// check (orientation coverage) would also fail.
    ///
    /// # Panics
    /// Panics if the reported item differs from the offending input.
    #[test]
    fn test_malformed_item_reported_before_coverage() {
        let result = ConfigTable::parse(&["portrait@360x540", "sideways@960x540"]);
        assert_eq!(
            result,
            Err(ConfigError::InvalidItem("sideways@960x540".to_owned()))
        );
    }

    /// Test the item grammar edge cases: digit-count bounds, signs,
    /// fractions, and missing separators.
    ///
    /// # Panics
    /// Panics if any malformed specifier is accepted or a valid one rejected.
    #[test]
    fn test_item_grammar() {
        for bad in [
            "portrait@36x540",      // width below 3 digits
            "portrait@3600000x540", // width above 6 digits
            "portrait@-360x540",    // sign
            "portrait@360.5x540",   // fraction
            "portrait@360x",        // missing height
            "portrait360x540",      // missing '@'
            "portrait@360",         // missing 'x'
            "",
        ] {
            let result = ConfigTable::parse(&[bad, "portrait@360x540", "landscape@960x540"]);
            assert_eq!(result, Err(ConfigError::InvalidItem(bad.to_owned())));
        }
        let result = ConfigTable::parse(&["portrait@100x999999", "landscape@960x540"]);
        assert!(result.is_ok());
    }

    /// Test that a missing orientation is reported for that orientation,
    /// portrait checked first.
    ///
    /// # Panics
    /// Panics if the error names the wrong orientation.
    #[test]
    fn test_orientation_missing() {
        assert_eq!(
            ConfigTable::parse(&["landscape@960x540"]),
            Err(ConfigError::OrientationMissing(Orientation::Portrait))
        );
        assert_eq!(
            ConfigTable::parse(&["portrait@360x540"]),
            Err(ConfigError::OrientationMissing(Orientation::Landscape))
        );
    }

    /// Test that the default table matches parsing the default specifiers.
    ///
    /// # Panics
    /// Panics if the two construction paths disagree.
    #[test]
    fn test_default_matches_default_specifiers() {
        assert_eq!(
            ConfigTable::parse(&DEFAULT_SPECIFIERS),
            Ok(ConfigTable::default())
        );
    }
}
