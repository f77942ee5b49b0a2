// ui/widgets/mod.rs - UI widgets

pub mod dialog;
pub mod editor_pane;
pub mod gutter;
pub mod menu;
pub mod status_bar;
