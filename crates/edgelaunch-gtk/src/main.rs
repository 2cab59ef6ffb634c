//! edgelaunch GTK4 host - edge strip and launcher surface on layer-shell
//!
//! Runs as a single GApplication instance. Later invocations forward their
//! action argument (`pause`, `play`, `notify-config-changed`, ...) to the
//! running instance over D-Bus.

mod announcer;
mod app;
mod compositor;
mod platform;
mod strip_window;
mod styles;
mod surface_window;
mod watcher;

use clap::Parser;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::compositor::Compositor;

const APP_ID: &str = "io.github.edgelaunch.EdgeLaunch";
const DEV_APP_ID: &str = "io.github.edgelaunch.EdgeLaunch.Dev";

#[derive(Parser, Debug)]
#[command(name = "edgelaunch-gtk")]
#[command(about = "Edge-activated overlay launcher")]
#[command(version)]
struct Cli {
    /// Action for the running instance: launch, pause, play,
    /// notify-config-changed, notify-data-changed,
    /// ensure-activation-tappable or permission-changed
    #[arg(default_value = "launch")]
    action: String,
}

/// `gtk4::init()` aborts if no display is available, so we must verify connectivity first.
/// Checking socket existence isn't enough - compositor may not be accepting connections yet.
fn wayland_display_ready() -> bool {
    use std::os::unix::net::UnixStream;

    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .unwrap_or_else(|_| format!("/run/user/{}", unsafe { libc::getuid() }));
    let runtime_path = std::path::Path::new(&runtime_dir);

    if let Ok(display) = std::env::var("WAYLAND_DISPLAY")
        && UnixStream::connect(runtime_path.join(&display)).is_ok()
    {
        return true;
    }

    let Ok(entries) = std::fs::read_dir(runtime_path) else {
        return false;
    };
    entries.flatten().any(|entry| {
        let path = entry.path();
        let is_socket_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("wayland-") && !n.ends_with(".lock"));
        is_socket_name && UnixStream::connect(&path).is_ok()
    })
}

fn is_dev_mode() -> bool {
    std::env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent().map(|dir| {
                dir.ends_with("target/debug") || dir.ends_with("target/release")
            })
        })
        .unwrap_or(false)
}

fn setup_logging() {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives()))
    };

    #[cfg(debug_assertions)]
    {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_filename = format!("edgelaunch-gtk-{timestamp}.log");
        let log_path = std::path::Path::new("/tmp").join(&log_filename);

        let symlink_path = std::path::Path::new("/tmp/edgelaunch-gtk.log");
        let _ = std::fs::remove_file(symlink_path);
        let _ = std::os::unix::fs::symlink(&log_path, symlink_path);

        let file_appender = tracing_appender::rolling::never("/tmp", &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter())
            .init();

        std::mem::forget(guard);
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter())
            .init();
    }
}

fn default_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "edgelaunch_gtk=debug,edgelaunch_core=debug"
    } else {
        "edgelaunch_gtk=info,edgelaunch_core=info"
    }
}

fn main() -> glib::ExitCode {
    setup_logging();

    info!("Starting edgelaunch-gtk");

    let max_wait = std::time::Duration::from_secs(10);
    let poll_interval = std::time::Duration::from_millis(100);
    let start = std::time::Instant::now();

    while !wayland_display_ready() {
        if start.elapsed() >= max_wait {
            error!(
                "Wayland display not available after {}s",
                max_wait.as_secs()
            );
            return glib::ExitCode::FAILURE;
        }
        std::thread::sleep(poll_interval);
    }

    let compositor = Compositor::detect();
    if !compositor.supports_layer_shell() {
        error!(
            "Layer shell not supported on {}. Requires a wlr-layer-shell compatible compositor.",
            compositor.name()
        );
        return glib::ExitCode::FAILURE;
    }

    let app_id = if is_dev_mode() { DEV_APP_ID } else { APP_ID };
    let app = gtk4::Application::builder()
        .application_id(app_id)
        .flags(gio::ApplicationFlags::HANDLES_COMMAND_LINE)
        .build();

    // The strip must outlive every window the launcher closes
    let hold_guard = app.hold();
    std::mem::forget(hold_guard);

    let host = app::Host::new();
    {
        let host = host.clone();
        app.connect_startup(move |app| {
            if let Err(e) = host.start(app) {
                error!("Failed to start edge launcher: {e:#}");
                app.quit();
            }
        });
    }
    app.connect_command_line(move |_, command_line| {
        match Cli::try_parse_from(command_line.arguments()) {
            Ok(cli) => {
                host.handle_action(&cli.action);
                glib::ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Invalid arguments: {e}");
                glib::ExitCode::FAILURE
            }
        }
    });

    app.run()
}
