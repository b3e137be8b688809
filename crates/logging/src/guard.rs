//! crates/logging/src/guard.rs
//! RAII guard that restores a logger's flags.

use std::ops::Deref;

use crate::flags::Flags;
use crate::logger::Logger;

/// Restores a [`Logger`]'s previous flags when dropped.
///
/// Created by [`Logger::scoped_flags`]. The guard dereferences to the logger,
/// so it can be used for logging while the temporary flags are in effect.
#[must_use = "dropping the guard immediately restores the previous flags"]
pub struct FlagGuard<'a> {
    logger: &'a Logger,
    previous: Flags,
    armed: bool,
}

impl<'a> FlagGuard<'a> {
    pub(crate) const fn new(logger: &'a Logger, previous: Flags) -> Self {
        Self {
            logger,
            previous,
            armed: true,
        }
    }

    /// The flags that will be restored on drop.
    #[must_use]
    pub const fn previous_flags(&self) -> Flags {
        self.previous
    }

    /// Consumes the guard without restoring, making the temporary flags
    /// permanent.
    pub fn keep(mut self) -> &'a Logger {
        self.armed = false;
        self.logger
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.logger.replace_flags(self.previous);
        }
    }
}

impl Deref for FlagGuard<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        self.logger
    }
}
