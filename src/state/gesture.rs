// Paint-gesture bookkeeping: keeps one continuous drag from re-stamping its own footprint.
use crate::geometry::Coord;
use crate::paint::PaintedIndices;

/// What produced a commit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitKind {
    Click,
    /// Pointer moved with the primary button held; carries the hovered cell,
    /// which may lie off the grid while part of the brush still lands on it.
    Drag { anchor: Coord },
    TouchMove,
    TouchEnd,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PaintGesture {
    /// Footprint of the last commit made while paused.
    pub last_painted: PaintedIndices,
    /// Footprint of the preview at the current pointer position.
    pub last_hover: PaintedIndices,
    /// Cell acted on by the last drag commit while running.
    pub last_drag_anchor: Option<Coord>,
    /// A touch-move happened since the last touch-end.
    pub touch_moved: bool,
}

impl PaintGesture {
    /// True while the pointer still covers part of the last committed footprint.
    pub fn overlaps_last_paint(&self) -> bool {
        !self.last_hover.is_disjoint(&self.last_painted)
    }

    pub fn record_hover(&mut self, painted: PaintedIndices, running: bool) {
        self.last_hover = if running { PaintedIndices::new() } else { painted };
    }

    /// Whether a commit of `kind` may paint. Brushes with fewer than
    /// `restamp_threshold` cells may be re-stamped while paused.
    pub fn allows(
        &self,
        kind: CommitKind,
        running: bool,
        brush_cells: usize,
        restamp_threshold: usize,
    ) -> bool {
        if running {
            return match kind {
                CommitKind::Drag { anchor } => Some(anchor) != self.last_drag_anchor,
                _ => true,
            };
        }
        if kind == CommitKind::TouchEnd && !self.touch_moved {
            return true;
        }
        brush_cells < restamp_threshold || !self.overlaps_last_paint()
    }

    pub fn record_commit(&mut self, kind: CommitKind, painted: PaintedIndices, running: bool) {
        if running {
            self.last_painted.clear();
            if let CommitKind::Drag { anchor } = kind {
                self.last_drag_anchor = Some(anchor);
            }
        } else {
            self.last_painted = painted;
        }
    }

    /// Forget the committed footprint so the next paint starts unsuppressed.
    pub fn reset_footprint(&mut self) {
        self.last_painted.clear();
        self.last_drag_anchor = None;
    }

    pub fn forget_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: usize = 17;

    fn set(ix: &[usize]) -> PaintedIndices {
        ix.iter().copied().collect()
    }

    #[test]
    fn empty_sets_never_overlap() {
        let g = PaintGesture::default();
        assert!(!g.overlaps_last_paint());
        assert!(g.allows(CommitKind::Click, false, 30, THRESHOLD));
    }

    #[test]
    fn paused_overlap_suppresses_large_brushes_only() {
        let mut g = PaintGesture::default();
        g.record_commit(CommitKind::Click, set(&[1, 2, 3]), false);
        g.record_hover(set(&[3, 4]), false);
        assert!(!g.allows(CommitKind::Click, false, 30, THRESHOLD));
        assert!(g.allows(CommitKind::Click, false, 16, THRESHOLD));
        g.record_hover(set(&[7, 8]), false);
        assert!(g.allows(CommitKind::Click, false, 30, THRESHOLD));
    }

    #[test]
    fn running_commits_clear_footprint() {
        let mut g = PaintGesture::default();
        g.record_commit(CommitKind::Click, set(&[1, 2]), true);
        assert!(g.last_painted.is_empty());
        g.record_hover(set(&[1, 2]), true);
        assert!(g.last_hover.is_empty());
    }

    #[test]
    fn running_drag_paints_once_per_anchor() {
        let mut g = PaintGesture::default();
        let at = |x, y| CommitKind::Drag { anchor: Coord::new(x, y) };
        assert!(g.allows(at(5, 0), true, 30, THRESHOLD));
        g.record_commit(at(5, 0), set(&[5]), true);
        assert!(!g.allows(at(5, 0), true, 30, THRESHOLD));
        assert!(g.allows(at(6, 0), true, 30, THRESHOLD));
    }

    #[test]
    fn running_drag_distinguishes_off_grid_anchors() {
        let mut g = PaintGesture::default();
        let at = |x, y| CommitKind::Drag { anchor: Coord::new(x, y) };
        assert!(g.allows(at(20, 5), true, 30, THRESHOLD));
        g.record_commit(at(20, 5), set(&[117]), true);
        assert!(!g.allows(at(20, 5), true, 30, THRESHOLD));
        assert!(g.allows(at(20, 12), true, 30, THRESHOLD));
        assert!(g.allows(at(-1, 5), true, 30, THRESHOLD));
    }

    #[test]
    fn touch_tap_always_commits() {
        let mut g = PaintGesture::default();
        g.record_commit(CommitKind::TouchEnd, set(&[1]), false);
        g.record_hover(set(&[1]), false);
        assert!(g.allows(CommitKind::TouchEnd, false, 30, THRESHOLD));
        g.touch_moved = true;
        assert!(!g.allows(CommitKind::TouchEnd, false, 30, THRESHOLD));
    }

    #[test]
    fn reset_footprint_lifts_suppression() {
        let mut g = PaintGesture::default();
        g.record_commit(CommitKind::Click, set(&[1]), false);
        g.record_hover(set(&[1]), false);
        g.last_drag_anchor = Some(Coord::new(1, 0));
        g.reset_footprint();
        assert!(g.allows(CommitKind::Click, false, 30, THRESHOLD));
        assert_eq!(g.last_drag_anchor, None);
    }
}
