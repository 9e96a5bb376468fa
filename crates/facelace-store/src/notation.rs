//! Solver notation.
//!
//! A cube is described to the solver as 54 letters: the faces in
//! [`Face::NOTATION_ORDER`], nine slots each in row-major order, and every
//! facelet written as the notation letter of its painted color.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use facelace_core::{Color, FACELET_COUNT, Face, FaceletPosition};
use serde::{Deserialize, Serialize};

use crate::{CubeState, EncodeError};

/// A 54-letter cube description over `U`, `R`, `F`, `D`, `L` and `B`.
///
/// The letter count and alphabet are checked on construction, so a
/// `CubeString` is always well formed. It says nothing about whether the cube
/// is solvable.
///
/// # Example
///
/// ```
/// use facelace_store::{CubeString, CubeStringError};
///
/// let cube: CubeString = "UUUUUUUUURRRRRRRRRBBBBBBBBBDDDDDDDDDLLLLLLLLLFFFFFFFFF"
///     .parse()
///     .unwrap();
/// assert_eq!(cube.as_str().len(), 54);
///
/// assert_eq!(
///     "UUU".parse::<CubeString>(),
///     Err(CubeStringError::InvalidLength { len: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CubeString(String);

/// Error returned when a string is not a well-formed [`CubeString`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CubeStringError {
    /// The string does not have exactly 54 characters.
    #[display("cube string must have 54 letters, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not one of `U`, `R`, `F`, `D`, `L`, `B`.
    #[display("invalid letter {letter:?} at position {index}")]
    InvalidLetter {
        /// The offending character.
        letter: char,
        /// Its character position.
        index: usize,
    },
}

impl CubeString {
    /// Returns the notation letters.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CubeString {
    type Err = CubeStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != FACELET_COUNT {
            return Err(CubeStringError::InvalidLength { len });
        }
        if let Some((index, letter)) = s
            .chars()
            .enumerate()
            .find(|(_, c)| Color::from_notation_letter(*c).is_none())
        {
            return Err(CubeStringError::InvalidLetter { letter, index });
        }
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<&str> for CubeString {
    type Error = CubeStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for CubeString {
    type Error = CubeStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CubeString> for String {
    fn from(cube: CubeString) -> Self {
        cube.0
    }
}

impl AsRef<str> for CubeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CubeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn notation_positions() -> impl Iterator<Item = FaceletPosition> {
    Face::NOTATION_ORDER
        .into_iter()
        .flat_map(FaceletPosition::face_positions)
}

/// Encodes a snapshot into solver notation.
///
/// Letters are keyed by the painted color, not by the face a facelet sits on.
/// Callers normally [`validate`](crate::validate) first.
///
/// # Errors
///
/// Returns [`EncodeError::UnsetFacelet`] for the first unset facelet in
/// notation order.
pub fn encode(state: &CubeState) -> Result<CubeString, EncodeError> {
    let letters = notation_positions()
        .map(|position| {
            state
                .get(position)
                .map(Color::notation_letter)
                .ok_or(EncodeError::UnsetFacelet { position })
        })
        .collect::<Result<String, _>>()?;
    Ok(CubeString(letters))
}

/// Decodes solver notation back into a complete snapshot.
#[must_use]
pub fn decode(cube: &CubeString) -> CubeState {
    let mut faces = [[None; 9]; 6];
    for (position, letter) in notation_positions().zip(cube.as_str().chars()) {
        faces[usize::from(position.face().index())][usize::from(position.slot().index())] =
            Color::from_notation_letter(letter);
    }
    CubeState::from_faces(faces)
}
