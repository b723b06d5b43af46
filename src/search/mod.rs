//! Search orchestration
//!
//! Holds the state of an ongoing nearby-facility search and coordinates
//! search rounds against a facility provider, so that only the newest
//! round's results are ever published. Error and logging plumbing for
//! the crate also lives here.

pub mod coordinator;
pub mod error;
pub mod logging;
pub mod state;

pub use coordinator::{SearchCoordinator, SearchTicket};
pub use error::{LocatorError, LocatorResult};
pub use logging::LoggingConfig;
pub use state::SearchState;
