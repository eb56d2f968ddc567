//! UI layer: app shell, slider panel, and the projected 3-D trajectory canvas.

pub mod app;
pub mod projection;
