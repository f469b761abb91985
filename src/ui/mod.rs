//! egui widgets of the viewer window.
pub mod panels;
pub mod plot;
