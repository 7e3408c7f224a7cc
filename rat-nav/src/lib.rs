pub mod application;
pub mod component;
pub mod error;
pub mod navigation;
pub mod state;
pub mod view;
pub mod viewmodel;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{AppContext, Application, Context};
pub use component::{Action, Component, Event, View};
pub use navigation::{Navigator, PageKind, PageSource};
pub use state::{Observe, Signal};
pub use view::{view_name, NotFoundView, ResolvedView, SharedView, ViewLocator};
pub use viewmodel::{page_handle, PageHandle, PageViewModel};
