#[cfg(feature = "serde-support")]
use serde::Serialize;

use super::GlVersion;

/// What must be present in the current context before an alias may be bound or a limit may be
/// queried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum GlCapabilityRequirement {
    /// Present in every context (GL 1.0 entry points like glGetError)
    AlwaysAvailable,

    /// Present when the context is desktop GL and its version is at least (major, minor)
    CoreVersion(u32, u32),

    /// Present when the context is GL ES and its version is at least (major, minor)
    EsVersion(u32, u32),

    /// Present in desktop GL from `core` and in GL ES from `es`
    CoreOrEsVersion { core: (u32, u32), es: (u32, u32) },

    /// Present when the driver advertises the named extension, i.e. "GL_ARB_debug_output"
    NamedExtension(&'static str),
}

impl GlCapabilityRequirement {
    pub const fn core(
        major: u32,
        minor: u32,
    ) -> Self {
        GlCapabilityRequirement::CoreVersion(major, minor)
    }

    pub const fn es(
        major: u32,
        minor: u32,
    ) -> Self {
        GlCapabilityRequirement::EsVersion(major, minor)
    }

    pub const fn core_or_es(
        core: (u32, u32),
        es: (u32, u32),
    ) -> Self {
        GlCapabilityRequirement::CoreOrEsVersion { core, es }
    }

    pub const fn extension(name: &'static str) -> Self {
        GlCapabilityRequirement::NamedExtension(name)
    }

    /// The minimum version this requirement asks of a context of the given API, or None if the
    /// requirement isn't version based or excludes that API
    pub fn min_version(
        &self,
        is_es: bool,
    ) -> Option<GlVersion> {
        match (*self, is_es) {
            (GlCapabilityRequirement::CoreVersion(major, minor), false)
            | (GlCapabilityRequirement::EsVersion(major, minor), true) => {
                Some(GlVersion::new(major, minor))
            }
            (GlCapabilityRequirement::CoreOrEsVersion { core, .. }, false) => {
                Some(GlVersion::new(core.0, core.1))
            }
            (GlCapabilityRequirement::CoreOrEsVersion { es, .. }, true) => {
                Some(GlVersion::new(es.0, es.1))
            }
            _ => None,
        }
    }
}

impl Default for GlCapabilityRequirement {
    fn default() -> Self {
        GlCapabilityRequirement::AlwaysAvailable
    }
}

impl std::fmt::Display for GlCapabilityRequirement {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match *self {
            GlCapabilityRequirement::AlwaysAvailable => write!(f, "always available"),
            GlCapabilityRequirement::CoreVersion(major, minor) => {
                write!(f, "GL {}.{}", major, minor)
            }
            GlCapabilityRequirement::EsVersion(major, minor) => {
                write!(f, "GL ES {}.{}", major, minor)
            }
            GlCapabilityRequirement::CoreOrEsVersion { core, es } => {
                write!(f, "GL {}.{} or GL ES {}.{}", core.0, core.1, es.0, es.1)
            }
            GlCapabilityRequirement::NamedExtension(name) => write!(f, "{}", name),
        }
    }
}
