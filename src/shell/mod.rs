//! UI shell state that does not depend on any windowing toolkit.
//!
//! - [`window`]: `WindowControl` contract and `TrayCoordinator`
//! - [`overlay`]: normal/overlay display mode for the countdown window

pub mod overlay;
pub mod window;

pub use overlay::{centered, Appearance, DisplayMode, OverlayController};
pub use window::{TrayCoordinator, WindowControl};
