use crate::models::Creator;

use super::forms::CreatorForm;
use super::remote::RemoteView;

/// Number of creator cards shown in each row of the list grid. Three
/// columns keep card text legible on most terminal sizes.
pub(crate) const GRID_COLUMNS: usize = 3;

/// State behind the card grid of all creators.
pub(crate) struct ListScreen {
    /// Result of the activation fetch against `list_all`.
    pub(crate) view: RemoteView<Vec<Creator>>,
    /// Index of the selected card in the grid (zero-based).
    pub(crate) selected: usize,
}

impl ListScreen {
    pub(crate) fn new(view: RemoteView<Vec<Creator>>) -> Self {
        let mut screen = Self { view, selected: 0 };
        screen.ensure_in_bounds();
        screen
    }

    /// The loaded records, or an empty slice while loading or failed.
    pub(crate) fn creators(&self) -> &[Creator] {
        match &self.view {
            RemoteView::Loaded(records) => records,
            _ => &[],
        }
    }

    pub(crate) fn current_creator(&self) -> Option<&Creator> {
        self.creators().get(self.selected)
    }

    /// Move the grid selection left or right by one cell, guarding against
    /// wrapping so keyboard navigation feels predictable.
    pub(crate) fn move_horizontal(&mut self, offset: isize) {
        let len = self.creators().len() as isize;
        if len == 0 {
            return;
        }
        let new_index = self.selected as isize + offset;
        if (0..len).contains(&new_index) {
            self.selected = new_index as usize;
        }
    }

    /// Move the grid selection up or down by one row.
    pub(crate) fn move_vertical(&mut self, offset: isize) {
        let len = self.creators().len() as isize;
        if len == 0 {
            return;
        }
        let new_index = self.selected as isize + offset * GRID_COLUMNS as isize;
        if (0..len).contains(&new_index) {
            self.selected = new_index as usize;
        }
    }

    pub(crate) fn ensure_in_bounds(&mut self) {
        let len = self.creators().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// State behind the single-creator view, keyed by the id taken from
/// navigation. The id is kept outside the view so a failed fetch still
/// knows which record it was for.
pub(crate) struct DetailScreen {
    pub(crate) id: i64,
    pub(crate) view: RemoteView<Creator>,
}

impl DetailScreen {
    pub(crate) fn creator(&self) -> Option<&Creator> {
        self.view.loaded()
    }
}

/// State behind the creation form. The draft lives here until it is either
/// persisted or abandoned.
#[derive(Default)]
pub(crate) struct CreateScreen {
    pub(crate) form: CreatorForm,
}

/// State behind the edit form: the record id plus the fetched draft (or the
/// fetch failure).
pub(crate) struct EditScreen {
    pub(crate) id: i64,
    pub(crate) view: RemoteView<CreatorForm>,
}

impl EditScreen {
    pub(crate) fn form_mut(&mut self) -> Option<&mut CreatorForm> {
        self.view.loaded_mut()
    }
}
