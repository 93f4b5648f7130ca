//! The command table of the context that is current on the calling thread.
//!
//! GL contexts are current per thread, so the active table is thread-local. Activating a context
//! installs a table bound to that context's capability set. Every command resolution after that
//! happens against that set, until another context is activated or the context is made
//! not-current.

use crate::{GlCapabilitySet, GlCommandTable, GlSymbolResolver, GlcapsError, GlcapsResult};
use std::cell::RefCell;
use std::sync::Arc;

thread_local! {
    static CURRENT_COMMAND_TABLE: RefCell<Option<GlCommandTable>> = RefCell::new(None);
}

/// Install `table` as the current table for this thread, returning the one it replaces
pub fn make_current_table(table: GlCommandTable) -> Option<GlCommandTable> {
    log::debug!(
        "Making GL capability set {:?} current",
        table.capabilities().id()
    );
    CURRENT_COMMAND_TABLE.with(|current| current.borrow_mut().replace(table))
}

/// Activate a context whose capabilities are already known. If a table for this same capability
/// set is already current nothing is re-resolved.
pub fn make_current(
    capabilities: Arc<GlCapabilitySet>,
    resolver: impl GlSymbolResolver + 'static,
) {
    let already_current = CURRENT_COMMAND_TABLE.with(|current| {
        current
            .borrow()
            .as_ref()
            .map(|table| table.capabilities().id() == capabilities.id())
            .unwrap_or(false)
    });

    if already_current {
        return;
    }

    make_current_table(GlCommandTable::new(capabilities, resolver));
}

/// Like `make_current`, but resolves every command immediately instead of on first use
pub fn make_current_eager(
    capabilities: Arc<GlCapabilitySet>,
    resolver: impl GlSymbolResolver + 'static,
) -> usize {
    let table = GlCommandTable::new(capabilities, resolver);
    let available_count = table.resolve_all();
    make_current_table(table);
    available_count
}

/// Activate the context that the platform layer just made current, querying its capabilities from
/// the driver
pub fn make_current_from_driver(
    resolver: impl GlSymbolResolver + 'static,
) -> Arc<GlCapabilitySet> {
    let table = GlCommandTable::from_driver(resolver);
    let capabilities = table.capabilities().clone();
    make_current_table(table);
    capabilities
}

/// Drop the current table. Commands dispatched afterwards fail with `NoCurrentContext`.
pub fn make_not_current() -> Option<GlCommandTable> {
    CURRENT_COMMAND_TABLE.with(|current| current.borrow_mut().take())
}

pub fn current_capabilities() -> Option<Arc<GlCapabilitySet>> {
    CURRENT_COMMAND_TABLE.with(|current| {
        current
            .borrow()
            .as_ref()
            .map(|table| table.capabilities().clone())
    })
}

/// Run `f` with the current table. `f` must not activate or deactivate a context.
pub fn with_current_table<R>(f: impl FnOnce(&GlCommandTable) -> R) -> GlcapsResult<R> {
    CURRENT_COMMAND_TABLE.with(|current| {
        let current = current.borrow();
        let table = current.as_ref().ok_or(GlcapsError::NoCurrentContext)?;
        Ok(f(table))
    })
}

/// Like `with_current_table`, but panics if the current table was built for a different capability
/// set than `capabilities`. This catches code that keeps using an old context's capabilities after
/// a switch.
pub fn with_current_table_for<R>(
    capabilities: &GlCapabilitySet,
    f: impl FnOnce(&GlCommandTable) -> R,
) -> GlcapsResult<R> {
    with_current_table(|table| {
        table.verify_capabilities(capabilities);
        f(table)
    })
}

pub fn is_available(logical_name: &str) -> bool {
    with_current_table(|table| table.is_available(logical_name)).unwrap_or(false)
}

/// Dispatch a command through the current table
///
/// # Safety
///
/// Same requirements as `GlCommandTable::dispatch`
pub unsafe fn dispatch_current<F: Copy, R>(
    logical_name: &str,
    invoke: impl FnOnce(F) -> R,
) -> GlcapsResult<R> {
    with_current_table(|table| table.dispatch(logical_name, invoke))?
}
