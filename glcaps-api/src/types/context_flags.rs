#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Bits reported through GL_CONTEXT_FLAGS. Only meaningful on GL 3.0+ contexts, older
    /// contexts always report empty flags.
    #[derive(Default)]
    #[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
    pub struct GlContextFlags: u32 {
        const FORWARD_COMPATIBLE = 0x0000_0001;
        const DEBUG = 0x0000_0002;
        /// GL_CONTEXT_FLAG_ROBUST_ACCESS_BIT (GL 4.5, or ARB_robustness)
        const ROBUST_ACCESS = 0x0000_0004;
        /// GL_CONTEXT_FLAG_NO_ERROR_BIT (GL 4.6, or KHR_no_error)
        const NO_ERROR = 0x0000_0008;
    }
}
