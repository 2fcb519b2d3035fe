pub mod area_panel;
pub mod status_bar;
