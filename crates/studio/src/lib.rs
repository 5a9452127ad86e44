//! Post studio: the authoring session, its terminal preview and the HTTP
//! functions the front end calls.
//!
//! - [`Session`] owns topic selections, free text, the current draft and
//!   the identity connection
//! - [`preview`] renders the draft as a feed card with its character badge
//! - [`server`] exposes generation, LinkedIn auth, publishing and e-mail as
//!   JSON endpoints

pub mod config;
pub mod error;
pub mod preview;
pub mod server;
pub mod session;

pub use config::StudioConfig;
pub use error::{StudioError, StudioResult};
pub use server::{build_router, run_server, AppState};
pub use session::Session;
