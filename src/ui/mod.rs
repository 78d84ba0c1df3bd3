pub mod drop_surface;
pub mod main_window;
pub mod status_bar;
pub mod theme;
