pub mod gesture;
pub mod menu;

pub use gesture::{CommitKind, PaintGesture};
pub use menu::ContextMenuState;
