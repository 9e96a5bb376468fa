use crate::MoveList;

/// A cursor over a solution's moves.
///
/// The cursor is `None` exactly when the list is empty; otherwise it stays
/// within `0..len`. Stepping past either end is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovePlayback {
    moves: MoveList,
    cursor: Option<usize>,
}

impl MovePlayback {
    /// Replaces the moves and puts the cursor on the first one.
    pub fn load(&mut self, moves: MoveList) {
        self.cursor = (!moves.is_empty()).then_some(0);
        self.moves = moves;
    }

    /// Drops all moves.
    pub fn clear(&mut self) {
        self.load(MoveList::default());
    }

    /// Returns the loaded moves.
    #[must_use]
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Advances to the next move. Returns whether the cursor moved.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        match self.cursor {
            Some(i) if i + 1 < self.moves.len() => {
                self.cursor = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Steps back to the previous move. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Returns the index and text of the current move.
    #[must_use]
    pub fn current(&self) -> Option<(usize, &str)> {
        let i = self.cursor?;
        self.moves.get(i).map(|mv| (i, mv))
    }

    /// Returns whether move `index` is the current one.
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.cursor == Some(index)
    }

    /// Returns whether a further move exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor.is_some_and(|i| i + 1 < self.moves.len())
    }

    /// Returns whether an earlier move exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.cursor.is_some_and(|i| i > 0)
    }
}
