//! gpui_linestack is a slider widget drawn as a row of thin bars.
//! Bars near the selected value scale up like a magnifier. The core is
//! backend-agnostic; the optional `gpui` feature adds a GPUI view.

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod interaction;
pub mod magnifier;
pub mod mapper;
pub mod range;
pub mod render;
pub mod stream;

pub use config::{DEFAULT_NUMBER_OF_LINES, SliderConfig};
pub use controller::{ANIMATION_DURATION, Bar, SliderBuilder, SliderController};
pub use error::ConfigError;
pub use geom::{ScreenPoint, ScreenRect};
#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiSliderView, SliderViewConfig};
pub use interaction::{InteractionState, PointerEvent, PointerPhase};
pub use magnifier::{DEFAULT_PROFILE, IDENTITY_SCALE, MagnifierPolicy, MagnifierWindow};
pub use mapper::ValueMapper;
pub use range::ValueRange;
pub use render::{BarRenderer, BarStates, BarTransform, Color, bar_rects, bar_width};
pub use stream::{SubscriberId, Subscription, ValuePublisher, ValueStream};
