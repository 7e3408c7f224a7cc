pub mod traits;

pub use traits::{Action, Component, Event, View};
