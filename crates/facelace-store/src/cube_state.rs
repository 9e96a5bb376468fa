use facelace_core::{
    Color, Face, FaceletPosition, Slot, containers::Array6, index::ColorSemantics,
};
use serde::{Deserialize, Serialize};

/// A read-only snapshot of all 54 facelets.
///
/// Faces are stored in [`Face::ALL`] order, each as nine optional colors in
/// row-major slot order. A snapshot may describe an incomplete or invalid
/// cube; use [`validate`](crate::validate) before encoding it.
///
/// # Example
///
/// ```
/// use facelace_core::{Color, Face, FaceletPosition, Slot};
/// use facelace_store::FaceletStore;
///
/// let store = FaceletStore::new();
/// let state = store.snapshot();
/// assert_eq!(state.face(Face::Left)[4], Some(Color::Orange));
/// assert_eq!(state.get(FaceletPosition::new(Face::Left, Slot::new(0))), None);
/// assert_eq!(state.missing_count(), 48);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: [[Option<Color>; 9]; 6],
}

impl CubeState {
    /// Creates a snapshot by asking `f` for the color of every facelet.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(FaceletPosition) -> Option<Color>,
    {
        let mut faces = [[None; 9]; 6];
        for pos in FaceletPosition::ALL {
            faces[usize::from(pos.face().index())][usize::from(pos.slot().index())] = f(pos);
        }
        Self { faces }
    }

    /// Creates a snapshot from per-face arrays in [`Face::ALL`] order.
    #[must_use]
    pub const fn from_faces(faces: [[Option<Color>; 9]; 6]) -> Self {
        Self { faces }
    }

    /// Returns a snapshot of a solved cube: every facelet has its face's center color.
    #[must_use]
    pub fn solved() -> Self {
        Self::from_fn(|pos| Some(pos.face().center_color()))
    }

    /// Returns the nine facelets of `face` in row-major order.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Option<Color>; 9] {
        &self.faces[usize::from(face.index())]
    }

    /// Returns the color at `pos`.
    #[must_use]
    pub fn get(&self, pos: FaceletPosition) -> Option<Color> {
        self.face(pos.face())[usize::from(pos.slot().index())]
    }

    /// Returns a copy of this snapshot with `pos` set to `color`.
    #[must_use]
    pub fn with(mut self, pos: FaceletPosition, color: Option<Color>) -> Self {
        self.faces[usize::from(pos.face().index())][usize::from(pos.slot().index())] = color;
        self
    }

    /// Iterates over every facelet in [`FaceletPosition::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceletPosition, Option<Color>)> + '_ {
        FaceletPosition::ALL
            .into_iter()
            .map(|pos| (pos, self.get(pos)))
    }

    /// Iterates over the facelets of `face`.
    pub fn face_iter(&self, face: Face) -> impl Iterator<Item = (Slot, Option<Color>)> + '_ {
        Slot::ALL.into_iter().zip(self.face(face).iter().copied())
    }

    /// Returns how many facelets hold each color.
    #[must_use]
    pub fn color_counts(&self) -> Array6<usize, ColorSemantics> {
        let mut counts = Array6::from_array([0; 6]);
        for color in self.faces.iter().flatten().flatten() {
            counts[*color] += 1;
        }
        counts
    }

    /// Returns how many facelets are unset.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.faces.iter().flatten().filter(|c| c.is_none()).count()
    }

    /// Returns whether every facelet has a color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }
}
