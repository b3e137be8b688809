//! crates/logging/src/registry.rs
//! Severity and tag filter tables shared by every logger bound to a registry.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use rustc_hash::FxHashMap;

use crate::levels::Severity;

/// Process-wide registry used by loggers that are not given one explicitly.
static GLOBAL_REGISTRY: OnceLock<Arc<FilterRegistry>> = OnceLock::new();

/// Shared severity and tag filter tables.
///
/// Each table maps a key to a "marked" boolean. How a mark is interpreted
/// (suppress or allow) is decided by the reading logger's
/// [`Flag::Whitelist`](crate::Flag::Whitelist) option, never by the registry.
///
/// Loggers created with [`Logger::new`](crate::Logger::new) share the registry
/// returned by [`FilterRegistry::global`], which lives until the process
/// exits. Independent registries can be created with [`FilterRegistry::new`]
/// and handed to loggers through [`LoggerBuilder::registry`](crate::LoggerBuilder::registry).
///
/// # Thread Safety
///
/// Both tables sit behind their own mutex. A poisoned lock is recovered, so a
/// panic in one thread never disables filtering in the others.
#[derive(Debug, Default)]
pub struct FilterRegistry {
    severities: Mutex<[bool; Severity::COUNT]>,
    tags: Mutex<FxHashMap<String, bool>>,
}

impl FilterRegistry {
    /// Creates an empty registry: no severity marked and no tag registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry, creating it on first use.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL_REGISTRY.get_or_init(|| Arc::new(Self::new())))
    }

    /// Ensures `tag` has an entry, leaving an existing mark untouched.
    ///
    /// Returns `true` when the tag was newly inserted.
    pub fn register_tag(&self, tag: &str) -> bool {
        let mut tags = self.lock_tags();
        if tags.contains_key(tag) {
            return false;
        }
        tags.insert(tag.to_owned(), false);
        true
    }

    /// Marks `severity` in the severity table.
    pub fn set_severity(&self, severity: Severity) {
        self.lock_severities()[severity.index()] = true;
    }

    /// Unmarks `severity` in the severity table.
    pub fn clear_severity(&self, severity: Severity) {
        self.lock_severities()[severity.index()] = false;
    }

    /// Marks `tag`, registering it first if needed.
    pub fn set_tag(&self, tag: &str) {
        self.store_tag(tag, true);
    }

    /// Unmarks `tag`, registering it first if needed.
    pub fn clear_tag(&self, tag: &str) {
        self.store_tag(tag, false);
    }

    /// Reports whether `severity` is marked.
    #[must_use]
    pub fn is_severity_marked(&self, severity: Severity) -> bool {
        self.lock_severities()[severity.index()]
    }

    /// Reports whether `tag` is marked. Unregistered tags read as unmarked.
    #[must_use]
    pub fn is_tag_marked(&self, tag: &str) -> bool {
        self.lock_tags().get(tag).copied().unwrap_or(false)
    }

    /// Reports whether `tag` has an entry in the tag table.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.lock_tags().contains_key(tag)
    }

    /// Returns every registered tag with its mark, sorted by tag.
    #[must_use]
    pub fn tags(&self) -> Vec<(String, bool)> {
        let mut tags: Vec<_> = self
            .lock_tags()
            .iter()
            .map(|(tag, marked)| (tag.clone(), *marked))
            .collect();
        tags.sort_unstable();
        tags
    }

    /// Returns the severities that are currently marked, in urgency order.
    #[must_use]
    pub fn marked_severities(&self) -> Vec<Severity> {
        let table = *self.lock_severities();
        Severity::ALL
            .into_iter()
            .filter(|severity| table[severity.index()])
            .collect()
    }

    /// Unmarks every severity and tag. Registered tags stay registered.
    pub fn reset(&self) {
        *self.lock_severities() = [false; Severity::COUNT];
        self.lock_tags().values_mut().for_each(|marked| *marked = false);
    }

    fn store_tag(&self, tag: &str, marked: bool) {
        let mut tags = self.lock_tags();
        match tags.get_mut(tag) {
            Some(entry) => *entry = marked,
            None => {
                tags.insert(tag.to_owned(), marked);
            }
        }
    }

    fn lock_severities(&self) -> MutexGuard<'_, [bool; Severity::COUNT]> {
        self.severities
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock_tags(&self) -> MutexGuard<'_, FxHashMap<String, bool>> {
        self.tags.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}
