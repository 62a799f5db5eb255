pub mod app;
pub mod board_view;
pub mod brush_panel;
pub mod context_menu;
pub mod controls_panel;
