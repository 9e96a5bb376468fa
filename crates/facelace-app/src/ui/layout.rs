use eframe::egui::Vec2;

/// Size of a screen component measured in facelet cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Units of `self` with `below` placed underneath it.
    #[must_use]
    pub(crate) fn stack(self, below: Self) -> Self {
        Self::new(self.width.max(below.width), self.height + below.height)
    }
}

/// Pixel sizes derived from a single facelet cell size.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) spacing: Vec2,
}

impl LayoutScale {
    const SPACING_FACTOR: Vec2 = Vec2::new(0.15, 0.20);
    const MIN_CELL_SIZE: f32 = 8.0;

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            spacing: Vec2::splat(cell_size) * Self::SPACING_FACTOR,
        }
    }

    /// Largest scale at which `units` fit into `available` pixels.
    #[must_use]
    pub(crate) fn fit(available: Vec2, units: ComponentUnits) -> Self {
        let cell_size = f32::min(available.x / units.width, available.y / units.height);
        Self::new(cell_size.max(Self::MIN_CELL_SIZE))
    }

    #[must_use]
    pub(crate) fn size_of(&self, units: ComponentUnits) -> Vec2 {
        Vec2::new(units.width, units.height) * self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_adds_heights_and_keeps_widest() {
        let stacked = ComponentUnits::new(9.5, 7.5).stack(ComponentUnits::new(7.0, 1.25));
        assert_eq!(stacked, ComponentUnits::new(9.5, 8.75));
    }

    #[test]
    fn fit_is_limited_by_the_tighter_axis() {
        let units = ComponentUnits::new(10.0, 5.0);
        assert!((LayoutScale::fit(Vec2::new(1000.0, 200.0), units).cell_size - 40.0).abs() < 1e-4);
        assert!((LayoutScale::fit(Vec2::new(300.0, 1000.0), units).cell_size - 30.0).abs() < 1e-4);
    }

    #[test]
    fn fit_never_collapses_below_minimum() {
        let scale = LayoutScale::fit(Vec2::new(10.0, 10.0), ComponentUnits::new(10.0, 10.0));
        assert!((scale.cell_size - LayoutScale::MIN_CELL_SIZE).abs() < f32::EPSILON);
    }
}
