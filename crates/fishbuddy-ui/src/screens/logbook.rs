//! Logbook screen: entry form, log cards and delete confirmation.
//!
//! The controller owns only view state. Entries live in the
//! [`LogbookStore`] passed into each mutating transition.

use std::time::Duration;

use chrono::NaiveDate;
use fishbuddy_logbook::{CatchLogEntry, EntryField, KeyValueStore, LogbookStore};

/// One rendered log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCard {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogbookScreen {
    draft: CatchLogEntry,
    add_form_visible: bool,
    details_expanded: bool,
    date_picker_visible: bool,
    picker_date: NaiveDate,
    delete_confirm_visible: bool,
    selected_index: Option<usize>,
    suggestion_visible: bool,
}

impl LogbookScreen {
    pub const TITLE: &'static str = "Fishing Logbook";
    pub const EMPTY_MESSAGE: &'static str = "No logs yet. Start adding some!";
    pub const SUGGESTION: &'static str = "Long press a log to delete it!";
    pub const DELETE_TITLE: &'static str = "Do you want to delete this log?";
    pub const DELETE_SUBTITLE: &'static str = "Are you sure?";
    pub const SUGGESTION_DURATION: Duration = Duration::from_secs(5);

    /// Fresh screen. `today` seeds the date picker.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: CatchLogEntry::default(),
            add_form_visible: false,
            details_expanded: false,
            date_picker_visible: false,
            picker_date: today,
            delete_confirm_visible: false,
            selected_index: None,
            suggestion_visible: true,
        }
    }

    pub fn draft(&self) -> &CatchLogEntry {
        &self.draft
    }

    pub fn is_add_form_visible(&self) -> bool {
        self.add_form_visible
    }

    pub fn is_details_expanded(&self) -> bool {
        self.details_expanded
    }

    pub fn is_date_picker_visible(&self) -> bool {
        self.date_picker_visible
    }

    pub fn picker_date(&self) -> NaiveDate {
        self.picker_date
    }

    pub fn is_delete_confirm_visible(&self) -> bool {
        self.delete_confirm_visible
    }

    /// Title and subtitle of the confirmation dialog while it is open
    pub fn delete_prompt(&self) -> Option<(&'static str, &'static str)> {
        self.delete_confirm_visible
            .then_some((Self::DELETE_TITLE, Self::DELETE_SUBTITLE))
    }

    /// Banner text while it is still showing
    pub fn suggestion(&self) -> Option<&'static str> {
        self.suggestion_visible.then_some(Self::SUGGESTION)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_suggestion_visible(&self) -> bool {
        self.suggestion_visible
    }

    pub fn open_add_form(&mut self) {
        self.add_form_visible = true;
    }

    /// Cancel the form, discarding the draft.
    pub fn close_add_form(&mut self) {
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.draft = CatchLogEntry::default();
        self.add_form_visible = false;
        self.details_expanded = false;
        self.date_picker_visible = false;
    }

    pub fn set_field(&mut self, field: EntryField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Show or hide the weight/length inputs
    pub fn toggle_details(&mut self) {
        self.details_expanded = !self.details_expanded;
    }

    pub fn open_date_picker(&mut self) {
        self.date_picker_visible = true;
    }

    pub fn cancel_date_picker(&mut self) {
        self.date_picker_visible = false;
    }

    pub fn pick_date(&mut self, date: NaiveDate) {
        self.picker_date = date;
        self.draft.set_date(date);
        self.date_picker_visible = false;
    }

    /// Append the draft and reset the form. No field is required.
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut LogbookStore<S>) {
        let entry = std::mem::take(&mut self.draft);
        tracing::debug!(count = store.len(), "Submitting log entry");
        store.append(entry);
        self.reset_form();
    }

    /// Select an entry and ask for delete confirmation
    pub fn long_press(&mut self, index: usize) {
        self.selected_index = Some(index);
        self.delete_confirm_visible = true;
    }

    /// Delete the selected entry. Returns the removed entry, if any.
    pub fn confirm_delete<S: KeyValueStore>(
        &mut self,
        store: &mut LogbookStore<S>,
    ) -> Option<CatchLogEntry> {
        let removed = self.selected_index.take().and_then(|i| store.remove_at(i));
        if removed.is_none() {
            tracing::debug!("Delete confirmed with no valid selection");
        }
        self.delete_confirm_visible = false;
        removed
    }

    pub fn cancel_delete(&mut self) {
        self.selected_index = None;
        self.delete_confirm_visible = false;
    }

    pub fn dismiss_suggestion(&mut self) {
        self.suggestion_visible = false;
    }

    /// Time since the screen was shown. Hides the banner once it has been up long enough.
    pub fn on_elapsed(&mut self, elapsed: Duration) {
        if elapsed >= Self::SUGGESTION_DURATION {
            self.suggestion_visible = false;
        }
    }

    pub fn cards<S: KeyValueStore>(&self, store: &LogbookStore<S>) -> Vec<LogCard> {
        store
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| LogCard {
                title: format!("Log {}", i + 1),
                fields: entry
                    .display_fields()
                    .into_iter()
                    .map(|(label, value)| (label, value.to_string()))
                    .collect(),
            })
            .collect()
    }
}
