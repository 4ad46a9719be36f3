//! Search session crate for the header search box.
//!
//! `SearchSession` is the state machine that decides when to look up, which
//! responses to show and where a selection navigates. `SearchDriver` runs it
//! on tokio against any `SearchBackend`.

pub mod config;
pub mod session;
pub mod driver;

pub use config::SearchConfig;
pub use session::{
    Effect, LookupOutcome, LookupTicket, Phase, SearchEvent, SearchSession, SearchView,
};
pub use driver::{SearchDriver, SearchHandle};
