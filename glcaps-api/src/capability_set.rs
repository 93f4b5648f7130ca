use crate::bindings;
use crate::{GlCapabilityRequirement, GlContextFlags, GlQueryPrimitive, GlVersion};
use fnv::FnvHashSet;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CAPABILITY_SET_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one `GlCapabilitySet` build. Two sets with identical contents built for two
/// activations still have different ids, which is what command caches are keyed by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlCapabilitySetId(u64);

/// What the active native context supports: a version plus the advertised extension names.
///
/// Built once when a context becomes current and never modified afterwards. When a different
/// context becomes current a new set is built, it is never patched in place.
#[derive(Debug)]
pub struct GlCapabilitySet {
    id: GlCapabilitySetId,
    version: GlVersion,
    is_es: bool,
    context_flags: GlContextFlags,
    extensions: FnvHashSet<String>,
}

impl GlCapabilitySet {
    /// Parse the strings returned by glGetString(GL_VERSION) and glGetString(GL_EXTENSIONS).
    /// Extension names may be separated by whitespace or commas. A version that can't be parsed
    /// is treated as 1.0.
    pub fn build(
        version_string: &str,
        extension_list_string: &str,
    ) -> Self {
        Self::from_extension_iter(version_string, split_extension_list(extension_list_string))
    }

    /// Like `build`, but with extensions that were enumerated one at a time (glGetStringi)
    pub fn from_extension_iter<I, S>(
        version_string: &str,
        extensions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (version, is_es) = parse_version_or_minimum(version_string);
        Self::new(version, is_es, extensions)
    }

    pub fn new<I, S>(
        version: GlVersion,
        is_es: bool,
        extensions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|extension| extension.as_ref().trim().to_string())
            .filter(|extension| !extension.is_empty())
            .collect();

        GlCapabilitySet {
            id: GlCapabilitySetId(NEXT_CAPABILITY_SET_ID.fetch_add(1, Ordering::Relaxed)),
            version,
            is_es,
            context_flags: GlContextFlags::empty(),
            extensions,
        }
    }

    /// The most conservative interpretation: GL 1.0 with no extensions
    pub fn minimum() -> Self {
        Self::new(GlVersion::MINIMUM, false, std::iter::empty::<&str>())
    }

    pub fn with_context_flags(
        mut self,
        context_flags: GlContextFlags,
    ) -> Self {
        self.context_flags = context_flags;
        self
    }

    /// Build the set by asking the driver. Never fails, anything the driver refuses to report is
    /// treated conservatively.
    #[profiling::function]
    pub fn query(query: &dyn GlQueryPrimitive) -> Self {
        let (version, is_es) = Self::query_version(query);
        Self::query_for_version(query, version, is_es)
    }

    /// Read and parse GL_VERSION. glGetString is available in every context, so this can be
    /// called before anything else is known about the context.
    pub fn query_version(query: &dyn GlQueryPrimitive) -> (GlVersion, bool) {
        let version_string = match query.get_string(bindings::VERSION) {
            Ok(version_string) => version_string.unwrap_or_default(),
            Err(error) => {
                log::warn!("Could not query GL_VERSION: {}", error);
                String::default()
            }
        };

        parse_version_or_minimum(&version_string)
    }

    /// Query extensions and context flags for a context already known to be `version`
    pub fn query_for_version(
        query: &dyn GlQueryPrimitive,
        version: GlVersion,
        is_es: bool,
    ) -> Self {
        // Core profiles reject glGetString(GL_EXTENSIONS), so 3.0+ contexts enumerate instead
        let extensions = if version >= GlVersion::new(3, 0) {
            query_indexed_extensions(query).or_else(|| query_extension_string(query))
        } else {
            query_extension_string(query)
        };

        let extensions = extensions.unwrap_or_else(|| {
            log::warn!("Could not query GL extensions, assuming none are supported");
            Vec::default()
        });

        // GL_CONTEXT_FLAGS is GL 3.0 and GL ES 3.2
        let context_flags_version = if is_es {
            GlVersion::new(3, 2)
        } else {
            GlVersion::new(3, 0)
        };
        let context_flags = if version >= context_flags_version {
            query_context_flags(query)
        } else {
            GlContextFlags::empty()
        };

        let capabilities = Self::new(version, is_es, extensions).with_context_flags(context_flags);
        log::debug!(
            "GL {}{} with {} extensions, flags {:?}",
            capabilities.version,
            if capabilities.is_es { " ES" } else { "" },
            capabilities.extensions.len(),
            capabilities.context_flags
        );
        capabilities
    }

    pub fn id(&self) -> GlCapabilitySetId {
        self.id
    }

    pub fn version(&self) -> GlVersion {
        self.version
    }

    pub fn is_es(&self) -> bool {
        self.is_es
    }

    pub fn context_flags(&self) -> GlContextFlags {
        self.context_flags
    }

    pub fn has_extension(
        &self,
        extension: &str,
    ) -> bool {
        self.extensions.contains(extension)
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|extension| extension.as_str())
    }

    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    pub fn supports(
        &self,
        requirement: &GlCapabilityRequirement,
    ) -> bool {
        // Version requirements only match the API they name, an ES 3.0 context is not a GL 3.0 one
        match *requirement {
            GlCapabilityRequirement::AlwaysAvailable => true,
            GlCapabilityRequirement::NamedExtension(extension) => self.has_extension(extension),
            _ => requirement
                .min_version(self.is_es)
                .map(|min_version| self.version >= min_version)
                .unwrap_or(false),
        }
    }
}

fn split_extension_list(extension_list_string: &str) -> impl Iterator<Item = &str> {
    extension_list_string
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|extension| !extension.is_empty())
}

fn parse_version_or_minimum(version_string: &str) -> (GlVersion, bool) {
    GlVersion::parse(version_string).unwrap_or_else(|| {
        log::warn!(
            "Could not parse GL version string {:?}, assuming GL {}",
            version_string,
            GlVersion::MINIMUM
        );
        (GlVersion::MINIMUM, false)
    })
}

fn query_indexed_extensions(query: &dyn GlQueryPrimitive) -> Option<Vec<String>> {
    let mut count = [0];
    if let Err(error) = query.get_integerv(bindings::NUM_EXTENSIONS, &mut count) {
        log::debug!("Could not query GL_NUM_EXTENSIONS: {}", error);
        return None;
    }

    if count[0] < 0 {
        log::warn!("Driver reported {} extensions", count[0]);
        return None;
    }

    // The count comes from the driver, so the list grows as strings actually arrive
    let mut extensions = Vec::default();
    for index in 0..count[0] as u32 {
        match query.get_stringi(bindings::EXTENSIONS, index) {
            Ok(Some(extension)) => extensions.push(extension),
            Ok(None) => {}
            Err(error) => {
                log::debug!("Could not query extension {}: {}", index, error);
                return None;
            }
        }
    }

    Some(extensions)
}

fn query_extension_string(query: &dyn GlQueryPrimitive) -> Option<Vec<String>> {
    match query.get_string(bindings::EXTENSIONS) {
        Ok(extensions) => Some(
            split_extension_list(&extensions.unwrap_or_default())
                .map(|extension| extension.to_string())
                .collect(),
        ),
        Err(error) => {
            log::debug!("Could not query GL_EXTENSIONS: {}", error);
            None
        }
    }
}

fn query_context_flags(query: &dyn GlQueryPrimitive) -> GlContextFlags {
    let mut flags = [0];
    match query.get_integerv(bindings::CONTEXT_FLAGS, &mut flags) {
        Ok(()) => GlContextFlags::from_bits_truncate(flags[0] as u32),
        Err(error) => {
            log::debug!("Could not query GL_CONTEXT_FLAGS: {}", error);
            GlContextFlags::empty()
        }
    }
}
