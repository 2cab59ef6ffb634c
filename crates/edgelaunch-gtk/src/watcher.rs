//! File watching for the config and entry files.

use gtk4::glib;
use gtk4::prelude::{FileExt, FileMonitorExt};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Wait for writers to finish before reacting
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Call `on_change` whenever `path` is written or created. The monitor
/// lives for the rest of the process.
pub fn watch_file(path: &Path, on_change: impl Fn() + Clone + 'static) {
    let file = gio::File::for_path(path);
    let monitor = match file.monitor_file(gio::FileMonitorFlags::NONE, gio::Cancellable::NONE) {
        Ok(m) => m,
        Err(e) => {
            warn!("Failed to watch {}: {e}", path.display());
            return;
        }
    };

    let path_clone = path.to_path_buf();
    monitor.connect_changed(move |_, _, _, event| {
        if matches!(
            event,
            gio::FileMonitorEvent::Changed | gio::FileMonitorEvent::Created
        ) {
            debug!("File changed: {}", path_clone.display());
            let on_change = on_change.clone();
            glib::timeout_add_local_once(DEBOUNCE, on_change);
        }
    });

    std::mem::forget(monitor);

    info!("Watching {}", path.display());
}
