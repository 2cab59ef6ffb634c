//! Compositor detection.
//!
//! The strip and the launcher are both layer-shell surfaces, so the only
//! thing we need to know up front is whether the session can host them.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompositorType {
    Hyprland,
    Niri,
    Sway,
    /// Wayland session without wlr-layer-shell (Mutter)
    Gnome,
    X11,
    /// Any other Wayland compositor; assumed to support layer-shell
    Unknown,
}

pub struct Compositor {
    compositor_type: CompositorType,
}

impl Compositor {
    /// Detect the running compositor from the session environment
    pub fn detect() -> Self {
        let compositor_type = Self::detect_type(|key| std::env::var(key).ok());
        debug!("Detected compositor: {:?}", compositor_type);
        Self { compositor_type }
    }

    fn detect_type(var: impl Fn(&str) -> Option<String>) -> CompositorType {
        let wayland = var("WAYLAND_DISPLAY").is_some();

        if !wayland && var("DISPLAY").is_some() {
            return CompositorType::X11;
        }
        if var("HYPRLAND_INSTANCE_SIGNATURE").is_some() {
            return CompositorType::Hyprland;
        }
        if var("NIRI_SOCKET").is_some() {
            return CompositorType::Niri;
        }
        if var("SWAYSOCK").is_some() {
            return CompositorType::Sway;
        }

        let gnome = var("GNOME_DESKTOP_SESSION_ID").is_some()
            || var("XDG_CURRENT_DESKTOP").is_some_and(|d| d.to_lowercase().contains("gnome"));
        if gnome {
            return CompositorType::Gnome;
        }

        CompositorType::Unknown
    }

    pub fn supports_layer_shell(&self) -> bool {
        !matches!(
            self.compositor_type,
            CompositorType::Gnome | CompositorType::X11
        )
    }

    pub fn name(&self) -> &'static str {
        match self.compositor_type {
            CompositorType::Hyprland => "Hyprland",
            CompositorType::Niri => "Niri",
            CompositorType::Sway => "Sway",
            CompositorType::Gnome => "GNOME",
            CompositorType::X11 => "X11",
            CompositorType::Unknown => "Wayland",
        }
    }
}
