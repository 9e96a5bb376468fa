use std::fmt::{self, Display};

/// The moves of a solution in face-turn notation, e.g. `R`, `U'`, `F2`.
///
/// Moves are kept as the solver wrote them; no notation is enforced.
///
/// # Example
///
/// ```
/// use facelace_client::MoveList;
///
/// let moves = MoveList::parse("  R U'\tF2  ");
/// assert_eq!(moves.len(), 3);
/// assert_eq!(moves.get(1), Some("U'"));
/// assert_eq!(moves.to_string(), "R U' F2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<String>,
}

impl MoveList {
    /// Splits `text` on runs of whitespace, dropping empty pieces.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            moves: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Returns the number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns whether there are no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the move at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// Iterates over the moves in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(mv)?;
        }
        Ok(())
    }
}

/// A successful solver answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// The moves that solve the cube. Empty for an already solved cube.
    pub moves: MoveList,
    /// Move count reported by the solver, if it sent one.
    pub reported_moves: Option<usize>,
    /// Free-form message from the solver, if it sent one.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_and_blank() {
        assert!(MoveList::parse("").is_empty());
        assert!(MoveList::parse(" \n\t ").is_empty());
        assert_eq!(MoveList::parse("").to_string(), "");
    }

    #[test]
    fn test_parse_keeps_order() {
        let moves = MoveList::parse("D2 R' B L2");
        let collected: Vec<_> = moves.iter().collect();
        assert_eq!(collected, ["D2", "R'", "B", "L2"]);
        assert_eq!(moves.get(4), None);
    }
}
