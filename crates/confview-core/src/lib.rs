//! Read-only display projection over configuration snapshots.
//!
//! The embedding application extracts the configuration slice from its own
//! state, hands it to [`project`], and renders the returned pairs.

pub mod error;
pub mod label;
pub mod state;
pub mod value;
pub mod view;

pub use error::{ConfViewError, Result};
pub use label::constant_label;
pub use state::{select_slice, ConfigurationState};
pub use value::ConfigValue;
pub use view::{project, DisplayPair};
