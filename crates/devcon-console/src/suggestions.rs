//! Auto-complete candidates with a cycling cursor.

use crate::registry::CommandRegistry;

/// Suggestions for the current partial input.
///
/// `refresh` runs on every edit of the input buffer. `next` walks the
/// candidates without recomputing them, so repeated auto-complete cycles
/// through the list that was current when the user stopped typing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Suggestions {
    candidates: Vec<String>,
    cursor: usize,
}

impl Suggestions {
    /// Create an empty suggestion list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute candidates for `input` and reset the cursor.
    pub fn refresh(&mut self, registry: &CommandRegistry, input: &str) {
        self.candidates = registry.completions(input);
        self.cursor = 0;
    }

    /// Return the candidate under the cursor and advance the cursor,
    /// wrapping around. `None` when there are no candidates.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        if self.candidates.is_empty() {
            return None;
        }
        let current = self.cursor;
        self.cursor = (self.cursor + 1) % self.candidates.len();
        Some(&self.candidates[current])
    }

    /// Current candidates, in registration order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Index of the candidate the next `next()` call returns.
    pub fn selected_index(&self) -> usize {
        self.cursor
    }

    /// True when the current input has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Drop all candidates and reset the cursor.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.cursor = 0;
    }
}
