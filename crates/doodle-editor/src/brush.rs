//! Brush presets offered by the side menu.
//!
//! Picking a preset changes the line width and forces a round cap for the
//! strokes that follow. Strokes already drawn keep their width.

/// Preset widths, in pixel units.
pub const DEFAULT_BRUSH_SIZES: [f32; 7] = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 100.0];

/// The discrete set of widths and which one is active.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushMenu {
    sizes: Vec<f32>,
    selected: Option<usize>,
}

impl BrushMenu {
    pub fn new(sizes: Vec<f32>) -> Self {
        Self {
            sizes,
            selected: None,
        }
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Activate the preset at `index`, returning its width.
    pub fn select(&mut self, index: usize) -> Option<f32> {
        let width = *self.sizes.get(index)?;
        self.selected = Some(index);
        Some(width)
    }

    /// Mark the preset matching `width` active, if there is one.
    pub fn select_width(&mut self, width: f32) -> Option<usize> {
        self.selected = self.sizes.iter().position(|w| *w == width);
        self.selected
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_width(&self) -> Option<f32> {
        self.selected.and_then(|i| self.sizes.get(i).copied())
    }
}

impl Default for BrushMenu {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_SIZES.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_presets() {
        let menu = BrushMenu::default();
        assert_eq!(menu.sizes(), &[5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 100.0]);
        assert_eq!(menu.selected(), None);
    }

    #[test]
    fn select_by_index() {
        let mut menu = BrushMenu::default();
        assert_eq!(menu.select(6), Some(100.0));
        assert_eq!(menu.selected_width(), Some(100.0));

        assert_eq!(menu.select(7), None);
        assert_eq!(menu.selected(), Some(6), "out-of-range keeps selection");
    }

    #[test]
    fn select_by_width() {
        let mut menu = BrushMenu::default();
        assert_eq!(menu.select_width(25.0), Some(4));
        assert_eq!(menu.select_width(12.0), None);
        assert_eq!(menu.selected_width(), None);
    }
}
