use crate::config::LauncherSettings;
use crate::overlay::LaunchConfig;
use edgelaunch_types::{Entry, Point, Rect, Side, Size, TouchAction, TouchSample};

/// How an activation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Launch(Entry),
    Cancelled,
}

/// Position of an entry: column 0 is the root level, next to the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub column: usize,
    pub row: usize,
}

/// Columns of entries browsed by one continuous finger movement.
///
/// Resting on a folder in the innermost column opens its children as a
/// new column; moving back to another entry of an outer column closes the
/// columns beyond it. Lifting the finger over an app launches it.
pub struct LauncherModel {
    settings: LauncherSettings,
    screen: Size,
    columns: Vec<Vec<Entry>>,
    /// Row in column `i` whose folder is shown as column `i + 1`
    opened: Vec<usize>,
    hovered: Option<Slot>,
    dwell: Option<(Slot, u64)>,
    finished: bool,
}

impl LauncherModel {
    #[must_use]
    pub fn new(config: LaunchConfig) -> Self {
        Self {
            settings: config.settings,
            screen: config.screen,
            columns: vec![config.entries],
            opened: Vec::new(),
            hovered: None,
            dwell: None,
            finished: false,
        }
    }

    /// Feed one sample in surface coordinates. Returns the outcome once the
    /// gesture ends; afterwards every sample is ignored.
    pub fn handle(&mut self, sample: &TouchSample) -> Option<Outcome> {
        if self.finished {
            return None;
        }

        match sample.action {
            TouchAction::Down | TouchAction::Move => {
                self.hover(sample.position(), sample.timestamp);
                None
            }
            TouchAction::Up => {
                self.hover(sample.position(), sample.timestamp);
                self.finished = true;
                let outcome = match self.hovered_entry() {
                    Some(entry) if !entry.is_folder() => Outcome::Launch(entry.clone()),
                    _ => Outcome::Cancelled,
                };
                Some(outcome)
            }
            TouchAction::Cancel => {
                self.finished = true;
                Some(Outcome::Cancelled)
            }
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[Vec<Entry>] {
        &self.columns
    }

    #[must_use]
    pub fn hovered(&self) -> Option<Slot> {
        self.hovered
    }

    #[must_use]
    pub fn hovered_entry(&self) -> Option<&Entry> {
        self.hovered.and_then(|slot| self.entry(slot))
    }

    #[must_use]
    pub fn entry(&self, slot: Slot) -> Option<&Entry> {
        self.columns.get(slot.column)?.get(slot.row)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn settings(&self) -> &LauncherSettings {
        &self.settings
    }

    /// Screen area of a column.
    #[must_use]
    pub fn column_rect(&self, column: usize) -> Rect {
        let size = self.settings.entry_size();
        let offset = i32::try_from(column).unwrap_or(i32::MAX).saturating_add(1);
        let x = match self.settings.side {
            Side::Right => self.screen.width.saturating_sub(offset.saturating_mul(size)),
            Side::Left => (offset - 1).saturating_mul(size),
        };
        Rect::new(x, 0, size, self.screen.height)
    }

    /// Screen area of one entry.
    #[must_use]
    pub fn slot_rect(&self, slot: Slot) -> Rect {
        let size = self.settings.entry_size();
        let column = self.column_rect(slot.column);
        let row = i32::try_from(slot.row).unwrap_or(i32::MAX);
        let y = self
            .column_top(slot.column)
            .saturating_add(row.saturating_mul(size));
        Rect::new(column.x, y, size, size)
    }

    fn column_top(&self, column: usize) -> i32 {
        let count = self.columns.get(column).map_or(0, Vec::len);
        let height = i32::try_from(count)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.settings.entry_size());
        (self.screen.height.saturating_sub(height) / 2).max(0)
    }

    fn slot_at(&self, point: Point) -> Option<Slot> {
        let size = f64::from(self.settings.entry_size());
        (0..self.columns.len()).find_map(|column| {
            if !self.column_rect(column).contains(point) {
                return None;
            }
            let offset = (point.y - f64::from(self.column_top(column))) / size;
            if offset < 0.0 {
                return None;
            }
            // Non-negative and bounded by the screen height
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let row = offset.floor() as usize;
            (row < self.columns[column].len()).then_some(Slot { column, row })
        })
    }

    fn hover(&mut self, point: Point, timestamp: u64) {
        let Some(slot) = self.slot_at(point) else {
            self.hovered = None;
            self.dwell = None;
            return;
        };

        if slot.column + 1 < self.columns.len() && self.opened[slot.column] != slot.row {
            self.columns.truncate(slot.column + 1);
            self.opened.truncate(slot.column);
        }
        self.hovered = Some(slot);

        let is_closed_folder = slot.column + 1 == self.columns.len()
            && self.entry(slot).is_some_and(Entry::is_folder);
        if !is_closed_folder {
            self.dwell = None;
            return;
        }

        let started = match self.dwell {
            Some((dwell_slot, started)) if dwell_slot == slot => started,
            _ => {
                self.dwell = Some((slot, timestamp));
                timestamp
            }
        };

        if timestamp.saturating_sub(started) >= self.settings.folder_dwell_ms {
            self.open_folder(slot);
        }
    }

    fn open_folder(&mut self, slot: Slot) {
        let Some(children) = self.entry(slot).map(|entry| entry.children().to_vec()) else {
            return;
        };
        if children.is_empty() {
            return;
        }
        self.columns.push(children);
        self.opened.push(slot.row);
        self.dwell = None;
    }
}
