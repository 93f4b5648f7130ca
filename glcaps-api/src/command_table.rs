use crate::bindings::types::GLenum;
use crate::{
    bindings, GlCapabilitySet, GlCapabilitySetId, GlCommandDescriptor, GlCommandTableQuery,
    GlFnPtr, GlSymbolResolver, GlVersion, GlcapsError, GlcapsResult, GL_COMMAND_DESCRIPTORS,
};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::sync::Arc;

// GL may hold one error flag per internal error type
const MAX_PENDING_ERRORS: usize = 16;

/// What to do when an alias's capability is present but the driver doesn't export its symbol
/// (drivers sometimes advertise an extension without exporting all of its entry points)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlAliasFallback {
    /// Keep walking the alias list. The first alias that is both capability-satisfied and exported
    /// wins. This is how the generated loaders behave.
    NextSatisfiedAlias,

    /// The first capability-satisfied alias decides. If its symbol is missing the command is
    /// unavailable for this context and lower-priority aliases are not tried.
    StopAtFirstSatisfied,
}

impl Default for GlAliasFallback {
    fn default() -> Self {
        GlAliasFallback::NextSatisfiedAlias
    }
}

/// The outcome of resolving one command against one capability set
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlResolvedCommand {
    pub logical_name: &'static str,
    pub bound_symbol: Option<GlFnPtr>,
    pub bound_alias: Option<&'static str>,
    pub capability_set_id: GlCapabilitySetId,
}

impl GlResolvedCommand {
    pub fn is_available(&self) -> bool {
        self.bound_symbol.is_some()
    }
}

/// Pick the entry point for `descriptor`. Aliases are tried in order; an alias whose requirement
/// is not met by `capabilities` is never looked up.
pub fn resolve_command(
    descriptor: &'static GlCommandDescriptor,
    capabilities: &GlCapabilitySet,
    resolver: &dyn GlSymbolResolver,
    fallback: GlAliasFallback,
) -> GlResolvedCommand {
    let mut resolved = GlResolvedCommand {
        logical_name: descriptor.logical_name,
        bound_symbol: None,
        bound_alias: None,
        capability_set_id: capabilities.id(),
    };

    for alias in descriptor.aliases {
        if !capabilities.supports(&alias.requirement) {
            continue;
        }

        if let Some(ptr) = resolver.resolve_symbol(alias.symbol_name) {
            log::trace!("Bound {} to {}", descriptor.logical_name, alias.symbol_name);
            resolved.bound_symbol = Some(ptr);
            resolved.bound_alias = Some(alias.symbol_name);
            return resolved;
        }

        match fallback {
            GlAliasFallback::NextSatisfiedAlias => {
                log::trace!(
                    "{} is allowed by {} but not exported by the driver, trying next alias",
                    alias.symbol_name,
                    alias.requirement
                );
            }
            GlAliasFallback::StopAtFirstSatisfied => {
                log::debug!(
                    "{} is allowed by {} but not exported by the driver",
                    alias.symbol_name,
                    alias.requirement
                );
                break;
            }
        }
    }

    log::debug!(
        "GL command {} is unavailable in this context",
        descriptor.logical_name
    );
    resolved
}

/// Resolved entry points for one context on one thread.
///
/// Commands are resolved on first use (or all at once with `resolve_all`) and cached against the
/// identity of the capability set the table is bound to. `rebind` drops every cached entry.
///
/// The table holds raw entry points that are only valid on the thread the context is current on,
/// so it is neither `Send` nor `Sync`.
pub struct GlCommandTable {
    capabilities: Arc<GlCapabilitySet>,
    resolver: Box<dyn GlSymbolResolver>,
    descriptors: FnvHashMap<&'static str, &'static GlCommandDescriptor>,
    fallback: GlAliasFallback,
    resolved: RefCell<FnvHashMap<&'static str, GlResolvedCommand>>,
}

impl std::fmt::Debug for GlCommandTable {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("GlCommandTable")
            .field("capability_set_id", &self.capabilities.id())
            .field("command_count", &self.descriptors.len())
            .field("resolved_count", &self.resolved_count())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl GlCommandTable {
    /// A table over the built-in commands with the default fallback policy
    pub fn new(
        capabilities: Arc<GlCapabilitySet>,
        resolver: impl GlSymbolResolver + 'static,
    ) -> Self {
        Self::with_descriptors(
            capabilities,
            resolver,
            GL_COMMAND_DESCRIPTORS,
            GlAliasFallback::default(),
        )
    }

    pub fn with_descriptors(
        capabilities: Arc<GlCapabilitySet>,
        resolver: impl GlSymbolResolver + 'static,
        descriptors: &'static [GlCommandDescriptor],
        fallback: GlAliasFallback,
    ) -> Self {
        let mut descriptor_lookup = FnvHashMap::default();
        for descriptor in descriptors {
            assert!(
                !descriptor.aliases.is_empty(),
                "GL command {} has no aliases",
                descriptor.logical_name
            );
            descriptor_lookup.insert(descriptor.logical_name, descriptor);
        }

        GlCommandTable {
            capabilities,
            resolver: Box::new(resolver),
            descriptors: descriptor_lookup,
            fallback,
            resolved: Default::default(),
        }
    }

    /// Build the capability set by querying the driver through this layer's own entry points, and
    /// return a table bound to it. The context must be current on the calling thread.
    pub fn from_driver(resolver: impl GlSymbolResolver + 'static) -> Self {
        Self::from_driver_with_descriptors(
            resolver,
            GL_COMMAND_DESCRIPTORS,
            GlAliasFallback::default(),
        )
    }

    /// Like `from_driver`. `descriptors` must include the query commands used by
    /// `GlCommandTableQuery`.
    #[profiling::function]
    pub fn from_driver_with_descriptors(
        resolver: impl GlSymbolResolver + 'static,
        descriptors: &'static [GlCommandDescriptor],
        fallback: GlAliasFallback,
    ) -> Self {
        // glGetString is always available, so a 1.0 set is enough to read GL_VERSION
        let mut table = Self::with_descriptors(
            Arc::new(GlCapabilitySet::minimum()),
            resolver,
            descriptors,
            fallback,
        );
        let (version, is_es) = GlCapabilitySet::query_version(&table.query());

        // Enumerating extensions may need version-gated entry points (glGetStringi)
        table.rebind(Arc::new(GlCapabilitySet::new(
            version,
            is_es,
            std::iter::empty::<&str>(),
        )));
        let capabilities = GlCapabilitySet::query_for_version(&table.query(), version, is_es);

        table.rebind(Arc::new(capabilities));
        table
    }

    pub fn capabilities(&self) -> &Arc<GlCapabilitySet> {
        &self.capabilities
    }

    pub fn fallback(&self) -> GlAliasFallback {
        self.fallback
    }

    pub fn version(&self) -> GlVersion {
        self.capabilities.version()
    }

    /// Bind the table to a new capability set (the context changed). Everything resolved so far
    /// is discarded.
    pub fn rebind(
        &mut self,
        capabilities: Arc<GlCapabilitySet>,
    ) {
        log::debug!(
            "Rebinding GL command table from {:?} to {:?}, dropping {} resolved commands",
            self.capabilities.id(),
            capabilities.id(),
            self.resolved_count()
        );
        self.capabilities = capabilities;
        self.resolved.get_mut().clear();
    }

    /// Panics if this table was not built for `capabilities`. Callers that hold on to a capability
    /// set use this to catch a context switch that skipped the activation path.
    pub fn verify_capabilities(
        &self,
        capabilities: &GlCapabilitySet,
    ) {
        assert_eq!(
            self.capabilities.id(),
            capabilities.id(),
            "GL command table is bound to a different capability set than the one in use"
        );
    }

    /// Resolve (or return the cached resolution of) a command
    pub fn resolved_command(
        &self,
        logical_name: &str,
    ) -> GlcapsResult<GlResolvedCommand> {
        let mut resolved = self.resolved.borrow_mut();
        if let Some(command) = resolved.get(logical_name) {
            assert_eq!(
                command.capability_set_id,
                self.capabilities.id(),
                "GL command {} was resolved against a stale capability set",
                command.logical_name
            );
            return Ok(*command);
        }

        let descriptor = self
            .descriptors
            .get(logical_name)
            .copied()
            .ok_or_else(|| GlcapsError::UnknownCommand(logical_name.to_string()))?;

        let command = resolve_command(
            descriptor,
            &self.capabilities,
            &*self.resolver,
            self.fallback,
        );
        resolved.insert(descriptor.logical_name, command);
        Ok(command)
    }

    /// True if the command can be dispatched in this context. Unknown commands are not available.
    pub fn is_available(
        &self,
        logical_name: &str,
    ) -> bool {
        self.resolved_command(logical_name)
            .map(|command| command.is_available())
            .unwrap_or(false)
    }

    /// The symbol name the command was bound to, if any
    pub fn bound_alias(
        &self,
        logical_name: &str,
    ) -> Option<&'static str> {
        self.resolved_command(logical_name)
            .ok()
            .and_then(|command| command.bound_alias)
    }

    /// Resolve every command now instead of on first use. Returns how many are available.
    #[profiling::function]
    pub fn resolve_all(&self) -> usize {
        let mut available_count = 0;
        for logical_name in self.descriptors.keys() {
            if self.is_available(logical_name) {
                available_count += 1;
            }
        }

        log::debug!(
            "{} of {} GL commands available",
            available_count,
            self.descriptors.len()
        );
        available_count
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.borrow().len()
    }

    pub fn command_count(&self) -> usize {
        self.descriptors.len()
    }

    /// Call a command through its bound entry point. `invoke` receives the entry point cast to `F`
    /// and its return value is passed through untouched.
    ///
    /// ```ignore
    /// let mut value = 0;
    /// unsafe {
    ///     table.dispatch::<PFNGLGETINTEGERVPROC, _>("GetIntegerv", |f| f(pname, &mut value))?;
    /// }
    /// ```
    ///
    /// # Safety
    ///
    /// `F` must be the `extern "system" fn` type matching the native signature of the command, and
    /// the context this table was built for must be current on the calling thread.
    pub unsafe fn dispatch<F: Copy, R>(
        &self,
        logical_name: &str,
        invoke: impl FnOnce(F) -> R,
    ) -> GlcapsResult<R> {
        let command = self.resolved_command(logical_name)?;
        let ptr = command
            .bound_symbol
            .ok_or(GlcapsError::UnavailableCommand(command.logical_name))?;
        Ok(invoke(ptr.cast::<F>()))
    }

    /// Like `dispatch`, and also checks glGetError afterwards. Errors already pending before the
    /// call are cleared first, so they aren't reported as this command's failure.
    ///
    /// # Safety
    ///
    /// Same requirements as `dispatch`
    pub unsafe fn dispatch_checked<F: Copy, R>(
        &self,
        logical_name: &str,
        invoke: impl FnOnce(F) -> R,
    ) -> GlcapsResult<R> {
        self.clear_pending_errors()?;
        let result = self.dispatch(logical_name, invoke)?;
        match self.get_error()? {
            bindings::NO_ERROR => Ok(result),
            error => Err(GlcapsError::GlError(error)),
        }
    }

    // Safety: the context this table was built for must be current
    pub(crate) unsafe fn get_error(&self) -> GlcapsResult<GLenum> {
        self.dispatch::<bindings::PFNGLGETERRORPROC, _>("GetError", |get_error| get_error())
    }

    /// Read and discard error flags left by earlier calls
    ///
    /// # Safety
    ///
    /// The context this table was built for must be current on the calling thread
    pub unsafe fn clear_pending_errors(&self) -> GlcapsResult<()> {
        for _ in 0..MAX_PENDING_ERRORS {
            let error = self.get_error()?;
            if error == bindings::NO_ERROR {
                break;
            }

            log::trace!("Discarding pending GL error 0x{:04X}", error);
        }

        Ok(())
    }

    /// A query primitive that goes through this table
    pub fn query(&self) -> GlCommandTableQuery<'_> {
        GlCommandTableQuery::new(self)
    }
}
