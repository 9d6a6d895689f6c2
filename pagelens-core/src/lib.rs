//! Framework-free core of the PageLens document navigator: the relevance
//! timeline (mapping, rendering, drag handling) and the session controller
//! that keeps the viewer, chart and result lists in step.

pub mod chart;
pub mod config;
pub mod dictation;
pub mod drag;
pub mod error;
pub mod gateway;
pub mod mapper;
pub mod session;
pub mod types;

pub use chart::{ChartFrame, Rgba, Stroke, Surface};
pub use config::ClientConfig;
pub use dictation::Dictation;
pub use drag::{DragEffect, DragMachine, DragState, PointerInput};
pub use error::ApiError;
pub use gateway::{Gateway, HttpGateway};
pub use mapper::Axis;
pub use session::{Session, SessionController, ViewSink};
