//! Shared state for all request handlers.

use std::path::PathBuf;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use changelog::ChangelogService;
use tokio::sync::Mutex;

/// State shared across handlers and the file watcher.
pub(crate) struct AppState {
    /// Changelog service guarded for concurrent requests.
    pub(crate) service: Mutex<ChangelogService>,
    /// Last rendered page, cleared when the source file changes.
    pub(crate) rendered: RwLock<Option<String>>,
    /// Set by the watcher, consumed by the poll endpoint.
    changed: AtomicBool,
    /// Path of the watched changelog file.
    pub(crate) input: PathBuf,
}

impl AppState {
    pub(crate) fn new(service: ChangelogService) -> Self {
        let input = service.config().input.clone();
        Self {
            service: Mutex::new(service),
            rendered: RwLock::new(None),
            changed: AtomicBool::new(false),
            input,
        }
    }

    /// Record a source change: drop the cached page and flag pollers.
    pub(crate) fn mark_changed(&self) {
        if let Ok(mut slot) = self.rendered.write() {
            *slot = None;
        }
        self.changed.store(true, Ordering::SeqCst);
    }

    /// Consume the changed flag, returning whether a change occurred since
    /// the last poll.
    pub(crate) fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::SeqCst)
    }

    pub(crate) fn cached_page(&self) -> Option<String> {
        self.rendered.read().ok().and_then(|slot| slot.clone())
    }

    pub(crate) fn store_page(&self, html: String) {
        if let Ok(mut slot) = self.rendered.write() {
            *slot = Some(html);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog::{ChangelogConfig, ChangelogService, PackageMetadata};

    fn state() -> AppState {
        let service =
            ChangelogService::with_metadata(ChangelogConfig::default(), PackageMetadata::default());
        AppState::new(service)
    }

    #[test]
    fn change_flag_resets_on_read() {
        let state = state();
        assert!(!state.take_changed());
        state.mark_changed();
        assert!(state.take_changed());
        assert!(!state.take_changed());
    }

    #[test]
    fn mark_changed_drops_the_cached_page() {
        let state = state();
        state.store_page("<html></html>".to_string());
        assert!(state.cached_page().is_some());
        state.mark_changed();
        assert!(state.cached_page().is_none());
    }

    #[test]
    fn input_comes_from_the_service_config() {
        let state = state();
        assert_eq!(state.input, PathBuf::from("CHANGELOG.md"));
    }
}
