//! Status notification through the desktop notification service.
//!
//! gio notifications have no notion of ongoing or secret notifications, so
//! those properties only influence priority.

use edgelaunch_core::overlay::{Priority, TapAction};
use edgelaunch_core::{Announcement, Error, ForegroundAnnouncer, Result, StartAction};
use gtk4::prelude::*;
use tracing::debug;

const NOTIFICATION_ID: &str = "edgelaunch-status";

pub struct GioAnnouncer {
    app: gtk4::Application,
}

impl GioAnnouncer {
    pub fn new(app: &gtk4::Application) -> Self {
        Self { app: app.clone() }
    }

    fn send(&self, announcement: &Announcement) -> Result<()> {
        if !self.app.is_registered() {
            return Err(Error::Announce("application is not registered".to_string()));
        }

        let notification = gio::Notification::new(&announcement.title);
        notification.set_body(Some(&announcement.body));
        notification.set_priority(match announcement.priority {
            Priority::Min | Priority::Low => gio::NotificationPriority::Low,
            Priority::Default => gio::NotificationPriority::Normal,
        });
        match announcement.tap_action {
            TapAction::OpenSettings => notification.set_default_action("app.open-settings"),
        }

        let (label, action) = match announcement.toggle {
            StartAction::Play => ("Resume", "app.play"),
            _ => ("Pause", "app.pause"),
        };
        notification.add_button(label, action);

        debug!("Sending status notification: {}", announcement.body);
        // Same id replaces the previous notification in place
        self.app.send_notification(Some(NOTIFICATION_ID), &notification);
        Ok(())
    }
}

impl ForegroundAnnouncer for GioAnnouncer {
    fn post(&mut self, announcement: &Announcement) -> Result<()> {
        self.send(announcement)
    }

    fn update(&mut self, announcement: &Announcement) -> Result<()> {
        self.send(announcement)
    }
}
