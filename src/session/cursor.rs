//! Selection cursor over the ranked result list

/// Highlighted index in the current results, or no selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor(Option<usize>);

impl SelectionCursor {
    /// Currently selected index
    pub fn index(&self) -> Option<usize> {
        self.0
    }

    /// Back to "no selection"
    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Move forward, wrapping to 0 after the last result
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.0 = match self.0 {
            Some(i) if i + 1 < len => Some(i + 1),
            _ => Some(0),
        };
    }

    /// Move backward, wrapping to the last result from 0 or from no selection
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.0 = match self.0 {
            Some(i) if i > 0 && i < len => Some(i - 1),
            _ => Some(len - 1),
        };
    }

    /// Select `index` if it is within `len`; returns whether it moved
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.0 = Some(index);
            true
        } else {
            false
        }
    }
}
