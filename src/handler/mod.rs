//! Handler contracts — the async capability shape per message shape.

mod handler;

pub use handler::{CommandHandler, CommandOutputHandler, QueryHandler};
