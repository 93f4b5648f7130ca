#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// A GL (or GL ES) version. Ordering is lexicographic on (major, minor).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    /// Assumed when the driver reports something we can't parse. Choosing the lowest version
    /// means aliases are under-selected, never over-selected.
    pub const MINIMUM: GlVersion = GlVersion::new(1, 0);

    pub const fn new(
        major: u32,
        minor: u32,
    ) -> Self {
        GlVersion { major, minor }
    }

    /// Parse the leading version token of a GL_VERSION string. Accepts the forms drivers actually
    /// return:
    ///
    /// - "4.5"
    /// - "4.6.0 NVIDIA 535.54.03"
    /// - "3.3 (Core Profile) Mesa 23.1.4"
    /// - "OpenGL ES 3.2 Mesa 23.1.4"
    /// - "OpenGL ES-CM 1.1"
    ///
    /// Returns the version and whether the string describes a GL ES context, or None if no
    /// version could be found.
    pub fn parse(version_string: &str) -> Option<(GlVersion, bool)> {
        let trimmed = version_string.trim();
        let (is_es, remainder) = match trimmed.strip_prefix("OpenGL ES") {
            // Skips profile suffixes like "-CM" and "-CL"
            Some(rest) => (true, rest.trim_start_matches(|c: char| !c.is_whitespace())),
            None => (false, trimmed),
        };

        let token = remainder.split_whitespace().next()?;
        let mut components = token.split('.');
        let major = parse_leading_digits(components.next()?)?;
        let minor = match components.next() {
            Some(minor) => parse_leading_digits(minor)?,
            None => 0,
        };

        Some((GlVersion::new(major, minor), is_es))
    }
}

impl Default for GlVersion {
    fn default() -> Self {
        GlVersion::MINIMUM
    }
}

impl std::fmt::Display for GlVersion {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn parse_leading_digits(component: &str) -> Option<u32> {
    let end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| component.len());
    component[..end].parse().ok()
}
