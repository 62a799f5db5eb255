// Right-click brush menu placement
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    pub open: bool,
    pub x: f64,
    pub y: f64,
    /// Grow upwards from the click instead of downwards.
    pub open_up: bool,
    /// Grow leftwards from the click instead of rightwards.
    pub open_left: bool,
    /// Touch input was seen; the menu stays closed from then on.
    pub uses_touch: bool,
}

impl ContextMenuState {
    /// Opens at (x, y), flipping whichever axis would overflow the window.
    pub fn open_at(&mut self, x: f64, y: f64, menu: (f64, f64), window: (f64, f64)) -> bool {
        if self.uses_touch {
            return false;
        }
        self.open_left = x + menu.0 > window.0;
        self.open_up = y + menu.1 > window.1;
        self.x = x;
        self.y = y;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// CSS transform anchoring the menu to the click point.
    pub fn transform(&self) -> String {
        let tx = if self.open_left { "-100%" } else { "0" };
        let ty = if self.open_up { "-100%" } else { "0" };
        format!("translate({}, {})", tx, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_down_right_when_it_fits() {
        let mut m = ContextMenuState::default();
        assert!(m.open_at(10.0, 20.0, (200.0, 300.0), (800.0, 600.0)));
        assert!(m.open);
        assert!(!m.open_up && !m.open_left);
        assert_eq!(m.transform(), "translate(0, 0)");
    }

    #[test]
    fn flips_near_edges() {
        let mut m = ContextMenuState::default();
        m.open_at(700.0, 500.0, (200.0, 300.0), (800.0, 600.0));
        assert!(m.open_up && m.open_left);
        assert_eq!(m.transform(), "translate(-100%, -100%)");
    }

    #[test]
    fn stays_closed_after_touch() {
        let mut m = ContextMenuState { uses_touch: true, ..Default::default() };
        assert!(!m.open_at(10.0, 10.0, (50.0, 50.0), (800.0, 600.0)));
        assert!(!m.open);
    }
}
