use tracing::warn;

use crate::{cli::IconMode, domain::phenomenon::Phenomenon, i18n::Localizer};

/// Tint opacity of a cell at rest and while selected.
pub const IDLE_ALPHA: f32 = 1.0;
pub const SELECTED_ALPHA: f32 = 0.5;

/// Single-selection state of the phenomenon strip. Purely cosmetic: which
/// scene is shown is decided by the controller, not by this state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorStrip {
    len: usize,
    selected: Option<usize>,
    focused: usize,
}

impl SelectorStrip {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
            focused: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Selects `index`, deselecting whichever cell was selected before.
    /// Re-selecting the current cell is allowed and keeps it selected.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.selected = Some(index);
        self.focused = index;
        Some(index)
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.len {
            self.focused = index;
        }
    }

    pub fn focus_next(&mut self) {
        if self.len > 0 {
            self.focused = (self.focused + 1).min(self.len - 1);
        }
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    #[must_use]
    pub fn tint_alpha(&self, index: usize) -> f32 {
        if self.selected == Some(index) {
            SELECTED_ALPHA
        } else {
            IDLE_ALPHA
        }
    }

    /// First cell index shown when only `capacity` cells fit, scrolled so the
    /// focused cell stays visible.
    #[must_use]
    pub fn first_visible(&self, capacity: usize) -> usize {
        if capacity == 0 || self.len <= capacity {
            return 0;
        }
        let max_first = self.len - capacity;
        self.focused.saturating_sub(capacity - 1).min(max_first)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripCell {
    Phenomenon { icon: &'static str, label: String },
    Placeholder,
}

/// Content for the cell at `index`. A missing catalog entry yields an empty
/// placeholder so a stale strip never takes the screen down.
#[must_use]
pub fn cell_at(
    phenomena: &[Phenomenon],
    index: usize,
    localizer: Localizer,
    icons: IconMode,
) -> StripCell {
    let Some(phenomenon) = phenomena.get(index) else {
        warn!(index, available = phenomena.len(), "no phenomenon for strip cell");
        return StripCell::Placeholder;
    };
    StripCell::Phenomenon {
        icon: phenomenon.icon.glyph(icons),
        label: localizer.text(phenomenon.name_key).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::catalog::{MockCatalog, PhenomenonCatalog},
        i18n::Locale,
    };

    #[test]
    fn selecting_moves_highlight() {
        let mut strip = SelectorStrip::new(5);
        assert_eq!(strip.tint_alpha(1), IDLE_ALPHA);

        assert_eq!(strip.select(1), Some(1));
        assert_eq!(strip.tint_alpha(1), SELECTED_ALPHA);

        assert_eq!(strip.select(3), Some(3));
        assert_eq!(strip.tint_alpha(1), IDLE_ALPHA);
        assert_eq!(strip.tint_alpha(3), SELECTED_ALPHA);
        assert_eq!(strip.focused(), 3);
    }

    #[test]
    fn reselecting_keeps_selection() {
        let mut strip = SelectorStrip::new(5);
        strip.select(2);
        assert_eq!(strip.select(2), Some(2));
        assert_eq!(strip.selected(), Some(2));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut strip = SelectorStrip::new(5);
        strip.select(0);
        assert_eq!(strip.select(5), None);
        assert_eq!(strip.selected(), Some(0));
    }

    #[test]
    fn focus_is_clamped() {
        let mut strip = SelectorStrip::new(3);
        strip.focus_prev();
        assert_eq!(strip.focused(), 0);
        for _ in 0..10 {
            strip.focus_next();
        }
        assert_eq!(strip.focused(), 2);

        let mut empty = SelectorStrip::new(0);
        empty.focus_next();
        assert_eq!(empty.focused(), 0);
    }

    #[test]
    fn scrolls_to_keep_focus_visible() {
        let mut strip = SelectorStrip::new(5);
        assert_eq!(strip.first_visible(3), 0);
        strip.focus(3);
        assert_eq!(strip.first_visible(3), 1);
        strip.focus(4);
        assert_eq!(strip.first_visible(3), 2);
        assert_eq!(strip.first_visible(5), 0);
        assert_eq!(strip.first_visible(0), 0);
    }

    #[test]
    fn cell_content_is_localized() {
        let phenomena = MockCatalog.create_weather_phenomena();
        let cell = cell_at(&phenomena, 4, Localizer::new(Locale::Ru), IconMode::Ascii);
        assert_eq!(
            cell,
            StripCell::Phenomenon {
                icon: "THN",
                label: "Гроза".to_string()
            }
        );
    }

    #[test]
    fn missing_cell_becomes_placeholder() {
        let phenomena = MockCatalog.create_weather_phenomena();
        let cell = cell_at(&phenomena, 9, Localizer::default(), IconMode::Unicode);
        assert_eq!(cell, StripCell::Placeholder);
    }
}
