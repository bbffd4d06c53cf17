//! GPUI integration for gpui_linestack.
//!
//! This module provides a GPUI view that paints the slider bars, reports the
//! laid-out width to the controller and forwards left-button mouse input as
//! pointer events.

mod config;
mod paint;
mod state;
mod view;

pub use config::SliderViewConfig;
pub use view::GpuiSliderView;
