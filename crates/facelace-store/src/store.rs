use facelace_core::{
    COLOR_QUOTA, Color, Face, FaceletPosition,
    containers::{Array6, Array54},
    index::{ColorSemantics, FaceletSemantics},
};

use crate::{
    CubeState, CubeString, FaceletState, InputBlockReason, InputOperation, StoreError,
    SubmitError, encode, validate,
};

/// The player's in-progress cube description.
///
/// The store is the single source of truth for facelet colors. The six
/// centers are fixed at construction; every other facelet is painted or
/// unset. Per-color usage counters are updated together with the facelet on
/// every successful mutation, and a rejected mutation changes nothing.
///
/// # Example
///
/// ```
/// use facelace_core::{Color, Face, FaceletPosition, Slot};
/// use facelace_store::{FaceletStore, StoreError};
///
/// let mut store = FaceletStore::new();
/// let pos = FaceletPosition::new(Face::Front, Slot::new(0));
///
/// store.set_color(pos, Color::Red).unwrap();
/// assert_eq!(store.color(pos), Some(Color::Red));
/// assert_eq!(store.count(Color::Red), 2);
///
/// // Centers are fixed.
/// assert_eq!(
///     store.set_color(FaceletPosition::center_of(Face::Front), Color::Red),
///     Err(StoreError::CannotModifyCenter)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceletStore {
    facelets: Array54<FaceletState, FaceletSemantics>,
    counts: Array6<usize, ColorSemantics>,
}

impl Default for FaceletStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceletStore {
    /// Creates a store with only the six centers colored.
    ///
    /// Each center color starts with a count of one; all other facelets are
    /// unset.
    #[must_use]
    pub fn new() -> Self {
        let mut facelets = Array54::from_array([FaceletState::Unset; 54]);
        let mut counts = Array6::from_array([0; 6]);
        for face in Face::ALL {
            let color = face.center_color();
            facelets[FaceletPosition::center_of(face)] = FaceletState::Center(color);
            counts[color] += 1;
        }
        Self { facelets, counts }
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CenterMismatch`] if a center in `state` does not
    /// hold its face's fixed color, or [`StoreError::CapacityRejected`] if a
    /// color appears on more than nine facelets.
    pub fn from_cube_state(state: &CubeState) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for (pos, color) in state.iter() {
            if pos.is_center() {
                if color != Some(pos.face().center_color()) {
                    return Err(StoreError::CenterMismatch { face: pos.face() });
                }
                continue;
            }
            if let Some(color) = color {
                store.set_color(pos, color)?;
            }
        }
        Ok(store)
    }

    /// Returns the state of the facelet at `pos`.
    #[must_use]
    pub fn facelet(&self, pos: FaceletPosition) -> &FaceletState {
        &self.facelets[pos]
    }

    /// Returns the color at `pos`, whether fixed or painted.
    #[must_use]
    pub fn color(&self, pos: FaceletPosition) -> Option<Color> {
        self.facelets[pos].as_color()
    }

    /// Returns how many facelets currently hold `color`, centers included.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.counts[color]
    }

    /// Returns the usage counters for all colors.
    #[must_use]
    pub fn counts(&self) -> &Array6<usize, ColorSemantics> {
        &self.counts
    }

    /// Returns how many more facelets may be painted `color`.
    #[must_use]
    pub fn remaining(&self, color: Color) -> usize {
        COLOR_QUOTA - self.counts[color]
    }

    /// Returns whether every facelet has a color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.facelets.values().all(|f| f.as_color().is_some())
    }

    /// Returns the effect painting `color` at `pos` would have.
    ///
    /// # Errors
    ///
    /// Returns [`InputBlockReason::CenterFacelet`] for a center facelet, or
    /// [`InputBlockReason::QuotaExhausted`] if `color` already covers nine
    /// facelets and the facelet does not hold it already.
    pub fn set_color_capability(
        &self,
        pos: FaceletPosition,
        color: Color,
    ) -> Result<InputOperation, InputBlockReason> {
        let operation = self.facelets[pos].set_color_capability(color)?;
        if operation.is_set() && self.counts[color] >= COLOR_QUOTA {
            return Err(InputBlockReason::QuotaExhausted { color });
        }
        Ok(operation)
    }

    /// Paints `color` at `pos`.
    ///
    /// Repainting a facelet releases its previous color. Painting the color a
    /// facelet already holds is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CannotModifyCenter`] for a center facelet, or
    /// [`StoreError::CapacityRejected`] if `color` already covers nine
    /// facelets. In both cases the store is left unchanged.
    pub fn set_color(
        &mut self,
        pos: FaceletPosition,
        color: Color,
    ) -> Result<InputOperation, StoreError> {
        let operation = self.set_color_capability(pos, color).inspect_err(|reason| {
            log::debug!("rejected painting {pos} {color}: {reason}");
        })?;
        if operation.is_no_op() {
            return Ok(operation);
        }

        if let Some(previous) = self.facelets[pos].as_color() {
            self.counts[previous] -= 1;
        }
        self.facelets[pos] = FaceletState::Painted(color);
        self.counts[color] += 1;

        Ok(operation)
    }

    /// Returns the effect clearing `pos` would have.
    ///
    /// # Errors
    ///
    /// Returns [`InputBlockReason::CenterFacelet`] for a center facelet.
    pub fn clear_capability(&self, pos: FaceletPosition) -> Result<InputOperation, InputBlockReason> {
        self.facelets[pos].clear_capability()
    }

    /// Unsets the facelet at `pos`, releasing its color.
    ///
    /// Clearing an unset facelet is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CannotModifyCenter`] for a center facelet.
    pub fn clear(&mut self, pos: FaceletPosition) -> Result<InputOperation, StoreError> {
        let operation = self.clear_capability(pos)?;
        if let InputOperation::Removed = operation
            && let Some(previous) = self.facelets[pos].as_color()
        {
            self.counts[previous] -= 1;
            self.facelets[pos] = FaceletState::Unset;
        }
        Ok(operation)
    }

    /// Restores the state produced by [`FaceletStore::new`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns a read-only snapshot of every facelet.
    #[must_use]
    pub fn snapshot(&self) -> CubeState {
        CubeState::from_fn(|pos| self.color(pos))
    }

    /// Validates the current state and encodes it into solver notation.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] if validation fails. Encoding a
    /// validated snapshot does not fail, but any encoder error is reported as
    /// [`SubmitError::Encode`].
    pub fn encode_validated(&self) -> Result<CubeString, SubmitError> {
        let state = self.snapshot();
        validate(&state)?;
        Ok(encode(&state)?)
    }
}

#[cfg(test)]
mod tests {
    use facelace_core::Slot;
    use proptest::prelude::*;

    use super::*;
    use crate::ValidationError;

    fn non_center_positions() -> impl Iterator<Item = FaceletPosition> {
        FaceletPosition::ALL.into_iter().filter(|pos| !pos.is_center())
    }

    fn recount(store: &FaceletStore) -> Array6<usize, ColorSemantics> {
        let mut counts = Array6::from_array([0; 6]);
        for pos in FaceletPosition::ALL {
            if let Some(color) = store.color(pos) {
                counts[color] += 1;
            }
        }
        counts
    }

    fn assert_initial(store: &FaceletStore) {
        for pos in FaceletPosition::ALL {
            if pos.is_center() {
                assert_eq!(
                    store.facelet(pos),
                    &FaceletState::Center(pos.face().center_color())
                );
            } else {
                assert_eq!(store.facelet(pos), &FaceletState::Unset);
            }
        }
        for color in Color::ALL {
            assert_eq!(store.count(color), 1);
        }
    }

    #[test]
    fn test_new_has_only_centers() {
        assert_initial(&FaceletStore::new());
    }

    #[test]
    fn test_set_color_updates_counters() {
        let mut store = FaceletStore::new();
        let pos = FaceletPosition::new(Face::Back, Slot::new(0));

        assert_eq!(store.set_color(pos, Color::Red), Ok(InputOperation::Set));
        assert_eq!(store.count(Color::Red), 2);

        // Repainting moves the count from the old color to the new one.
        assert_eq!(store.set_color(pos, Color::Blue), Ok(InputOperation::Set));
        assert_eq!(store.count(Color::Red), 1);
        assert_eq!(store.count(Color::Blue), 2);

        // Same color is a no-op.
        assert_eq!(store.set_color(pos, Color::Blue), Ok(InputOperation::NoOp));
        assert_eq!(store.count(Color::Blue), 2);
    }

    #[test]
    fn test_tenth_white_is_rejected() {
        let mut store = FaceletStore::new();
        let targets: Vec<_> = non_center_positions().take(10).collect();

        // The white center already counts as one.
        for pos in &targets[..8] {
            store.set_color(*pos, Color::White).unwrap();
        }
        assert_eq!(store.count(Color::White), 9);

        let before = store.clone();
        for pos in &targets[8..] {
            assert_eq!(
                store.set_color(*pos, Color::White),
                Err(StoreError::CapacityRejected {
                    color: Color::White
                })
            );
        }
        assert_eq!(store, before);
        assert_eq!(store.count(Color::White), 9);
    }

    #[test]
    fn test_rejected_repaint_keeps_previous_color() {
        let mut store = FaceletStore::new();
        let mut positions = non_center_positions();
        for pos in positions.by_ref().take(8) {
            store.set_color(pos, Color::Green).unwrap();
        }
        let target = positions.next().unwrap();
        store.set_color(target, Color::Yellow).unwrap();

        let before = store.clone();
        assert!(store.set_color(target, Color::Green).is_err());
        assert_eq!(store, before);
        assert_eq!(store.color(target), Some(Color::Yellow));
        assert_eq!(store.count(Color::Yellow), 2);
    }

    #[test]
    fn test_centers_cannot_be_modified() {
        let mut store = FaceletStore::new();
        for face in Face::ALL {
            let pos = FaceletPosition::center_of(face);
            for color in Color::ALL {
                assert_eq!(
                    store.set_color(pos, color),
                    Err(StoreError::CannotModifyCenter)
                );
            }
            assert_eq!(store.clear(pos), Err(StoreError::CannotModifyCenter));
        }
        assert_initial(&store);
    }

    #[test]
    fn test_clear_releases_color() {
        let mut store = FaceletStore::new();
        let pos = FaceletPosition::new(Face::Left, Slot::new(3));
        store.set_color(pos, Color::Orange).unwrap();
        assert_eq!(store.count(Color::Orange), 2);

        assert_eq!(store.clear(pos), Ok(InputOperation::Removed));
        assert_eq!(store.facelet(pos), &FaceletState::Unset);
        assert_eq!(store.count(Color::Orange), 1);

        assert_eq!(store.clear(pos), Ok(InputOperation::NoOp));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut store = FaceletStore::new();
        for pos in non_center_positions().take(20) {
            store.set_color(pos, Color::ALL[usize::from(pos.slot().index()) % 6]).unwrap();
        }
        store.reset();
        assert_initial(&store);
        assert_eq!(store, FaceletStore::new());
    }

    #[test]
    fn test_capability_matches_mutation() {
        let mut store = FaceletStore::new();
        let pos = FaceletPosition::new(Face::Top, Slot::new(1));
        assert_eq!(
            store.set_color_capability(pos, Color::Red),
            Ok(InputOperation::Set)
        );
        store.set_color(pos, Color::Red).unwrap();
        assert_eq!(
            store.set_color_capability(pos, Color::Red),
            Ok(InputOperation::NoOp)
        );
        assert_eq!(
            store.set_color_capability(FaceletPosition::center_of(Face::Top), Color::White),
            Err(InputBlockReason::CenterFacelet)
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = FaceletStore::new();
        store
            .set_color(FaceletPosition::new(Face::Bottom, Slot::new(5)), Color::Green)
            .unwrap();
        let rebuilt = FaceletStore::from_cube_state(&store.snapshot()).unwrap();
        assert_eq!(rebuilt, store);
    }

    #[test]
    fn test_from_cube_state_rejects_wrong_center() {
        let state = CubeState::solved().with(FaceletPosition::center_of(Face::Right), Some(Color::Blue));
        assert_eq!(
            FaceletStore::from_cube_state(&state),
            Err(StoreError::CenterMismatch { face: Face::Right })
        );
    }

    #[test]
    fn test_solved_cube_encodes() {
        let store = FaceletStore::from_cube_state(&CubeState::solved()).unwrap();
        assert!(store.is_complete());
        let cube = store.encode_validated().unwrap();
        assert_eq!(
            cube.as_str(),
            "UUUUUUUUURRRRRRRRRBBBBBBBBBDDDDDDDDDLLLLLLLLLFFFFFFFFF"
        );
    }

    #[test]
    fn test_encode_validated_reports_incomplete_input() {
        let store = FaceletStore::new();
        assert_eq!(
            store.encode_validated(),
            Err(SubmitError::Invalid(ValidationError::IncompleteInput {
                missing: 48
            }))
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Set(usize, usize),
        Clear(usize),
        Reset,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            8 => (0..54usize, 0..6usize).prop_map(|(p, c)| Op::Set(p, c)),
            3 => (0..54usize).prop_map(Op::Clear),
            1 => Just(Op::Reset),
        ]
    }

    proptest! {
        #[test]
        fn test_counters_stay_consistent(ops in proptest::collection::vec(op_strategy(), 0..200)) {
            let mut store = FaceletStore::new();
            for op in ops {
                let before = store.clone();
                let result = match op {
                    Op::Set(p, c) => store.set_color(FaceletPosition::ALL[p], Color::ALL[c]).map(|_| ()),
                    Op::Clear(p) => store.clear(FaceletPosition::ALL[p]).map(|_| ()),
                    Op::Reset => {
                        store.reset();
                        Ok(())
                    }
                };
                if result.is_err() {
                    prop_assert_eq!(&store, &before);
                }
                prop_assert_eq!(store.counts(), &recount(&store));
                for color in Color::ALL {
                    prop_assert!(store.count(color) <= COLOR_QUOTA);
                }
                for face in Face::ALL {
                    prop_assert_eq!(
                        store.facelet(FaceletPosition::center_of(face)),
                        &FaceletState::Center(face.center_color())
                    );
                }
            }
        }
    }
}
