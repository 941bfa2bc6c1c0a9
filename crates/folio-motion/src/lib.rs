//! Interaction and animation engine for the folio site.
//!
//! Nothing here touches a platform API. Hosts feed pointer/scroll events into
//! the telemetry sources, call [`MotionScene::frame`] once per display refresh,
//! and implement [`Scheduler`] for carousel autoplay.

pub mod carousel;
pub mod constants;
pub mod error;
pub mod frame;
pub mod header;
pub mod observer;
pub mod parallax;
pub mod pointer;
pub mod scroll;
pub mod spring;
pub mod timer;

pub use carousel::*;
pub use constants::*;
pub use error::ConfigError;
pub use frame::*;
pub use header::*;
pub use observer::SubscriptionToken;
pub use parallax::*;
pub use pointer::*;
pub use scroll::*;
pub use spring::*;
pub use timer::*;
