use eframe::egui::{Color32, Visuals};
use facelace_core::Color;

/// Colors used to draw the cube net.
///
/// Facelet fills come from the cube colors themselves; everything else is
/// derived from the current visuals so the net follows the light/dark theme.
#[derive(Debug, Clone)]
pub(crate) struct NetPalette {
    pub(crate) unset_bg: Color32,
    pub(crate) border_inactive: Color32,
    pub(crate) border_center: Color32,
    pub(crate) border_same_color: Color32,
    pub(crate) blocked_overlay: Color32,
    pub(crate) face_label: Color32,
}

impl NetPalette {
    #[must_use]
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            unset_bg: visuals.text_edit_bg_color(),
            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_center: visuals.strong_text_color(),
            border_same_color: visuals.selection.stroke.color,
            blocked_overlay: visuals.error_fg_color.gamma_multiply(0.35),
            face_label: visuals.text_color(),
        }
    }
}

#[must_use]
pub(crate) fn facelet_fill(color: Color) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Picks black or white text for legibility on top of `color`.
#[must_use]
pub(crate) fn contrast_text(color: Color) -> Color32 {
    let (r, g, b) = color.rgb();
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    if luma > 128_000 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_text_is_readable_on_each_color() {
        assert_eq!(contrast_text(Color::White), Color32::BLACK);
        assert_eq!(contrast_text(Color::Yellow), Color32::BLACK);
        assert_eq!(contrast_text(Color::Blue), Color32::WHITE);
        assert_eq!(contrast_text(Color::Green), Color32::WHITE);
    }
}
