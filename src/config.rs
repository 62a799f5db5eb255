//! Grid geometry constants and the user settings kept in localStorage.

use serde::{Deserialize, Serialize};

use crate::brush::DEFAULT_BRUSH;
use crate::geometry::{Coord, GridSize, cells_that_fit, pixel_to_cell};

pub const CELL_SIZE: f64 = 15.0;
pub const GRID_GAP: f64 = 1.0;
/// Brushes with fewer cells than this may be re-stamped over their own trail.
pub const DRAG_RESTAMP_THRESHOLD: usize = 17;
pub const DEFAULT_TICK_MS: u32 = 50;
/// Stored intervals are clamped to the span of the speed presets.
pub const MIN_TICK_MS: u32 = 16;
pub const MAX_TICK_MS: u32 = 200;
/// (label, interval) pairs offered by the speed picker.
pub const SPEED_PRESETS: &[(&str, u32)] =
    &[("Slow", MAX_TICK_MS), ("Normal", 100), ("Fast", DEFAULT_TICK_MS), ("Max", MIN_TICK_MS)];

const SETTINGS_KEY: &str = "life_settings";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cell_size: f64,
    pub gap: f64,
    pub drag_restamp_threshold: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            gap: GRID_GAP,
            drag_restamp_threshold: DRAG_RESTAMP_THRESHOLD,
        }
    }
}

impl GridConfig {
    /// How many cells a viewport of `width` x `height` pixels holds.
    pub fn capacity(&self, width: f64, height: f64) -> GridSize {
        GridSize {
            width: cells_that_fit(width, self.cell_size, self.gap),
            height: cells_that_fit(height, self.cell_size, self.gap),
        }
    }

    pub fn pixel_to_coord(&self, px: f64, py: f64) -> Coord {
        Coord {
            x: pixel_to_cell(px, self.cell_size, self.gap),
            y: pixel_to_cell(py, self.cell_size, self.gap),
        }
    }

    /// Top-left pixel of the cell at (x, y).
    pub fn cell_origin(&self, x: i32, y: i32) -> (f64, f64) {
        let pitch = self.cell_size + self.gap;
        (x as f64 * pitch, y as f64 * pitch)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_ms: u32,
    pub brush: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { tick_ms: DEFAULT_TICK_MS, brush: DEFAULT_BRUSH.to_string() }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Self {
        let mut s: Settings = serde_json::from_str(raw).unwrap_or_default();
        s.tick_ms = match s.tick_ms {
            0 => DEFAULT_TICK_MS,
            ms => ms.clamp(MIN_TICK_MS, MAX_TICK_MS),
        };
        s
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(SETTINGS_KEY, &s);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_matches_cell_pitch() {
        let cfg = GridConfig::default();
        // 50 cells * 16px - 1px trailing gap
        assert_eq!(cfg.capacity(799.0, 399.0), GridSize::new(50, 25));
        assert_eq!(cfg.capacity(798.0, 0.0), GridSize::new(49, 0));
    }

    #[test]
    fn pixels_map_to_cells() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.pixel_to_coord(33.0, 15.0), Coord::new(2, 0));
        assert_eq!(cfg.cell_origin(2, 3), (32.0, 48.0));
    }

    #[test]
    fn settings_fall_back_on_bad_json() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
        assert_eq!(Settings::from_json("{\"tick_ms\":0}"), Settings::default());
        let s = Settings::from_json("{\"brush\":\"glider\"}");
        assert_eq!(s.brush, "glider");
        assert_eq!(s.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn stored_tick_is_clamped_to_presets() {
        assert_eq!(Settings::from_json("{\"tick_ms\":4294967295}").tick_ms, MAX_TICK_MS);
        assert_eq!(Settings::from_json("{\"tick_ms\":3}").tick_ms, MIN_TICK_MS);
        assert_eq!(Settings::from_json("{\"tick_ms\":100}").tick_ms, 100);
        for &(_, ms) in SPEED_PRESETS {
            assert_eq!(ms.clamp(MIN_TICK_MS, MAX_TICK_MS), ms);
        }
    }
}
