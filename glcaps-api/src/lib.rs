//! Runtime resolution of GL entry points and implementation limits.
//!
//! A `GlCapabilitySet` describes what the active context supports. Logical commands are bound to
//! the best native symbol the context allows through a `GlCommandTable`, and implementation limits
//! are read in one pass by a `GlLimitsCollector`. Neither path ever selects an entry point or
//! queries a limit the context doesn't have.

pub use capability_set::*;
pub use command::*;
pub use command_table::*;
pub use error::*;
pub use limits::*;
pub use limits_collector::*;
pub use query::*;
pub use symbol_resolver::*;
pub use types::*;

pub mod bindings;
pub mod current_context;
mod types;

mod capability_set;
mod command;
mod command_table;
mod error;
mod limits;
mod limits_collector;
mod query;
mod symbol_resolver;

#[cfg(test)]
mod test_support;
