//! File watching.
//!
//! Watches the parent directory of the changelog file (editors often replace
//! the file on save, which would drop a watch on the file itself) and marks
//! the shared state dirty when the changelog is created or modified.

use std::path::Path;
use std::sync::Arc;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::Result;
use crate::state::AppState;

/// Start watching the changelog file.
///
/// The returned watcher must be kept alive for the duration of the server;
/// dropping it stops event delivery.
pub(crate) fn watch_input(state: Arc<AppState>) -> Result<RecommendedWatcher> {
    let input = state.input.clone();
    let watch_dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut watcher =
        notify::recommended_watcher(move |res: std::result::Result<Event, notify::Error>| {
            let event = match res {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!(error = %err, "file watcher error");
                    return;
                }
            };
            if !relevant(&event, &input) {
                return;
            }
            tracing::info!(path = %input.display(), "changelog changed, invalidating preview");
            let mut service = state.service.blocking_lock();
            service.clear_cache();
            drop(service);
            state.mark_changed();
        })?;

    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(dir = %watch_dir.display(), "watching for changes");
    Ok(watcher)
}

fn relevant(event: &Event, input: &Path) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }
    let name = input.file_name();
    event
        .paths
        .iter()
        .any(|p| p == input || (name.is_some() && p.file_name() == name))
}
