//! The sandbox reducer: sole owner of the live board, the preview board,
//! the selected brush and the paint-gesture history. Every input from the
//! canvas, keyboard, controls and interval arrives as a `SandboxAction`.

use std::rc::Rc;
use yew::Reducible;

use crate::brush::Brush;
use crate::config::GridConfig;
use crate::geometry::{Coord, GridSize};
use crate::model::{PreviewBoard, SimulationBoard};
use crate::state::{CommitKind, PaintGesture};
use crate::util::clog;

#[derive(Clone, Debug, PartialEq)]
pub struct SandboxState {
    pub config: GridConfig,
    pub simulation: SimulationBoard,
    pub preview: PreviewBoard,
    pub gesture: PaintGesture,
    pub brush: Brush,
    /// Last cell the pointer hovered, if it is still over the board.
    pub hover: Option<Coord>,
    /// Bumped on every change; the canvas redraws when it moves.
    pub version: u64,
}

#[derive(Clone, Debug)]
pub enum SandboxAction {
    /// Viewport size in pixels.
    Resize { width: f64, height: f64 },
    Hover { coord: Coord },
    HoverClear,
    Click { coord: Coord },
    /// Pointer moved with the primary button held.
    Drag { coord: Coord },
    TouchMove { coord: Coord },
    TouchEnd { coord: Coord },
    ToggleRunning,
    SetRunning(bool),
    Tick,
    Step,
    Clear,
    SelectBrush(Brush),
    RotateBrush,
}

impl SandboxState {
    pub fn new(config: GridConfig, width: f64, height: f64, brush: Brush) -> Self {
        let size = config.capacity(width, height);
        Self {
            config,
            simulation: SimulationBoard::new(size),
            preview: PreviewBoard::new(size),
            gesture: PaintGesture::default(),
            brush,
            hover: None,
            version: 0,
        }
    }

    pub fn size(&self) -> GridSize {
        self.simulation.size()
    }

    pub fn running(&self) -> bool {
        self.simulation.running
    }

    fn small_brush(&self) -> bool {
        self.brush.cell_count() < self.config.drag_restamp_threshold
    }

    fn hover_at(&mut self, coord: Coord) {
        self.hover = Some(coord);
        let painted = self.preview.show(coord, &self.brush);
        self.gesture.record_hover(painted, self.simulation.running);
    }

    fn refresh_preview(&mut self) {
        if let Some(c) = self.hover {
            self.hover_at(c);
        }
    }

    fn commit(&mut self, coord: Coord, kind: CommitKind) -> bool {
        let running = self.simulation.running;
        let threshold = self.config.drag_restamp_threshold;
        if !self.gesture.allows(kind, running, self.brush.cell_count(), threshold) {
            return false;
        }
        let painted = self.simulation.paint(coord, &self.brush);
        self.gesture.record_commit(kind, painted, running);
        true
    }

    fn set_running(&mut self, running: bool) -> bool {
        if self.simulation.running == running {
            return false;
        }
        self.simulation.running = running;
        self.gesture.reset_footprint();
        clog(if running { "Simulation running" } else { "Simulation paused" });
        true
    }

    /// Applies `action` in place; returns whether anything changed.
    pub fn apply(&mut self, action: SandboxAction) -> bool {
        use SandboxAction::*;
        match action {
            Resize { width, height } => {
                let size = self.config.capacity(width, height);
                if size == self.size() {
                    return false;
                }
                clog(&format!("Board resized to {}x{}", size.width, size.height));
                self.simulation.resize(size);
                self.preview.resize(size);
                // painted indices are laid out for the old column count
                self.gesture.forget_all();
                true
            }
            Hover { coord } => {
                self.hover_at(coord);
                true
            }
            HoverClear => {
                self.hover = None;
                self.preview.clear();
                true
            }
            Click { coord } => self.commit(coord, CommitKind::Click),
            Drag { coord } => {
                self.hover_at(coord);
                self.commit(coord, CommitKind::Drag { anchor: coord });
                true
            }
            TouchMove { coord } => {
                self.gesture.touch_moved = true;
                self.hover_at(coord);
                if self.small_brush() {
                    self.commit(coord, CommitKind::TouchMove);
                }
                true
            }
            TouchEnd { coord } => {
                self.commit(coord, CommitKind::TouchEnd);
                self.gesture.touch_moved = false;
                self.hover = None;
                self.preview.clear();
                true
            }
            ToggleRunning => {
                let running = !self.simulation.running;
                self.set_running(running)
            }
            SetRunning(running) => self.set_running(running),
            Tick => {
                if !self.simulation.running {
                    return false;
                }
                self.simulation.step();
                true
            }
            Step => {
                self.simulation.step();
                true
            }
            Clear => {
                clog("Board cleared");
                self.simulation.clear();
                self.preview.clear();
                self.gesture.forget_all();
                true
            }
            SelectBrush(brush) => {
                self.brush = brush;
                self.refresh_preview();
                true
            }
            RotateBrush => {
                self.brush = self.brush.rotate90();
                self.refresh_preview();
                true
            }
        }
    }
}

impl Reducible for SandboxState {
    type Action = SandboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if !new.apply(action) {
            return self;
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
