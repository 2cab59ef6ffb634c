//! Loading the entry hierarchy.
//!
//! The store behind an [`DataSource`] is only open for the duration of one
//! [`execute_with_open_data_source`] call; nothing keeps a handle to it
//! between activations.

mod prepare;
mod store;

pub use prepare::prepare_entries;
pub use store::{EntriesFile, JsonEntryStore};

use crate::Result;
use edgelaunch_types::Entry;
use std::ops::Deref;

/// Store of launchable entries.
pub trait DataSource {
    /// Open the underlying store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or read.
    fn open(&mut self) -> Result<()>;

    /// Release everything acquired by `open`. Called exactly once per
    /// successful `open`.
    fn close(&mut self);

    /// Root level of the hierarchy, in display order. Only valid while open.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not open or its content is invalid.
    fn load_root_content(&self) -> Result<Vec<Entry>>;
}

/// Closes the data source when dropped, so `close` runs even if the action
/// panics.
struct OpenDataSource<'a, D: DataSource + ?Sized> {
    source: &'a mut D,
}

impl<D: DataSource + ?Sized> Deref for OpenDataSource<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.source
    }
}

impl<D: DataSource + ?Sized> Drop for OpenDataSource<'_, D> {
    fn drop(&mut self) {
        self.source.close();
    }
}

/// Run `action` with `source` opened before and closed after.
///
/// # Errors
///
/// Returns the error from `open` (in which case `close` is not called) or
/// whatever `action` returns.
pub fn execute_with_open_data_source<D, T, F>(source: &mut D, action: F) -> Result<T>
where
    D: DataSource + ?Sized,
    F: FnOnce(&D) -> Result<T>,
{
    source.open()?;
    let guard = OpenDataSource { source };
    action(&*guard)
}

/// Load the root entries inside an open/close bracket.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or loaded.
pub fn load_root_entries<D: DataSource + ?Sized>(source: &mut D) -> Result<Vec<Entry>> {
    execute_with_open_data_source(source, |open| open.load_root_content())
}
