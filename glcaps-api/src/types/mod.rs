mod version;
pub use version::*;

mod requirement;
pub use requirement::*;

mod context_flags;
pub use context_flags::*;

mod limit;
pub use limit::*;
