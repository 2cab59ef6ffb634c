use crate::Result;
use crate::config::NotificationConfig;
use edgelaunch_types::StartAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Min,
    Low,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// What tapping the announcement does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    OpenSettings,
}

/// Persistent status indicator shown while the strip is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub body: String,
    pub priority: Priority,
    pub visibility: Visibility,
    pub ongoing: bool,
    pub tap_action: TapAction,
    /// Action offered as a button: `Pause` while active, `Play` while paused
    pub toggle: StartAction,
}

impl Announcement {
    #[must_use]
    pub fn for_state(config: &NotificationConfig, active: bool) -> Self {
        let (body, toggle) = if active {
            (&config.active_body, StartAction::Pause)
        } else {
            (&config.paused_body, StartAction::Play)
        };

        Self {
            title: config.title.clone(),
            body: body.clone(),
            priority: Priority::Min,
            visibility: Visibility::Public,
            ongoing: true,
            tap_action: TapAction::OpenSettings,
            toggle,
        }
    }
}

/// Keeps the process visible to the platform while the strip is registered.
pub trait ForegroundAnnouncer {
    /// Post the announcement. Called at most once per process.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Announce`] if the announcement cannot be shown.
    fn post(&mut self, announcement: &Announcement) -> Result<()>;

    /// Replace the content of the posted announcement.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Announce`] if the announcement cannot be updated.
    fn update(&mut self, announcement: &Announcement) -> Result<()>;
}
