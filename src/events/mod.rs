//! Outbound notifications from the engine to a presentation layer.

pub mod event;
pub mod sink;

pub use event::{GameEvent, Notice};
pub use sink::{EventLog, EventSink, NullSink};
