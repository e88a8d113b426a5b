use std::fmt;

use indexmap::IndexSet;

use crate::constants::MAX_SELECTED_ROWS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    LimitReached { limit: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::LimitReached { limit } => {
                write!(f, "you can select at most {limit} rows")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Selected grid rows, identified by their index in the current collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelection {
    limit: usize,
    rows: IndexSet<usize>,
}

impl Default for RowSelection {
    fn default() -> Self {
        Self::new(MAX_SELECTED_ROWS)
    }
}

impl RowSelection {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            rows: IndexSet::with_capacity(limit),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.limit
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Whether a checkbox for `row` should be enabled.
    pub fn can_select(&self, row: usize) -> bool {
        self.is_selected(row) || !self.is_full()
    }

    /// Selected rows in the order they were picked.
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    pub fn select(&mut self, row: usize) -> Result<(), SelectionError> {
        if self.is_selected(row) {
            return Ok(());
        }
        if self.is_full() {
            return Err(SelectionError::LimitReached { limit: self.limit });
        }
        self.rows.insert(row);
        Ok(())
    }

    pub fn deselect(&mut self, row: usize) -> bool {
        self.rows.shift_remove(&row)
    }

    /// Flip the selection state of `row`; returns whether it ends up selected.
    pub fn toggle(&mut self, row: usize) -> Result<bool, SelectionError> {
        if self.deselect(row) {
            Ok(false)
        } else {
            self.select(row).map(|_| true)
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_row_is_rejected() {
        let mut selection = RowSelection::new(3);
        selection.select(0).unwrap();
        selection.select(4).unwrap();
        selection.select(7).unwrap();

        assert_eq!(
            selection.select(9),
            Err(SelectionError::LimitReached { limit: 3 })
        );
        assert_eq!(selection.rows().collect::<Vec<_>>(), vec![0, 4, 7]);
    }

    #[test]
    fn reselecting_a_selected_row_is_not_an_error() {
        let mut selection = RowSelection::new(1);
        selection.select(2).unwrap();
        assert!(selection.select(2).is_ok());
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn full_selection_disables_only_unselected_rows() {
        let mut selection = RowSelection::new(2);
        selection.select(1).unwrap();
        assert!(selection.can_select(5));

        selection.select(3).unwrap();
        assert!(selection.can_select(1));
        assert!(!selection.can_select(5));
    }

    #[test]
    fn toggle_frees_a_slot() {
        let mut selection = RowSelection::default();
        for row in 0..3 {
            assert_eq!(selection.toggle(row), Ok(true));
        }
        assert!(selection.toggle(3).is_err());
        assert_eq!(selection.toggle(1), Ok(false));
        assert_eq!(selection.toggle(3), Ok(true));
        assert_eq!(selection.rows().collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn clear_empties_selection() {
        let mut selection = RowSelection::default();
        selection.select(0).unwrap();
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.limit(), MAX_SELECTED_ROWS);
    }
}
