//! Circulation policy
//!
//! Lending rules that a library may tune through configuration.

use serde::{Deserialize, Serialize};

/// Lending rules applied at check-out time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CirculationPolicy {
    /// Whether checking out a book that is already out is accepted as a no-op
    #[serde(default = "default_allow_double_checkout")]
    pub allow_double_checkout: bool,
}

const fn default_allow_double_checkout() -> bool {
    true
}

impl Default for CirculationPolicy {
    fn default() -> Self {
        Self {
            allow_double_checkout: default_allow_double_checkout(),
        }
    }
}

impl CirculationPolicy {
    /// A policy that refuses to lend a book that is already out
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_double_checkout: false,
        }
    }
}
