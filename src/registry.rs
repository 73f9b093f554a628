//! Registration surface — where the host receives enabled formatters.

use std::collections::HashMap;

use crate::formatter::{Direction, Formatter};

/// Implemented by the host's message-format hooks.
pub trait FormatRegistry {
    /// Install `formatter` for `direction`, replacing the host default.
    fn register(&mut self, direction: Direction, formatter: Formatter);
}

/// In-process registry, keyed by direction.
impl FormatRegistry for HashMap<Direction, Formatter> {
    fn register(&mut self, direction: Direction, formatter: Formatter) {
        self.insert(direction, formatter);
    }
}
