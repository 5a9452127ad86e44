//! External gateways for composed posts.
//!
//! Every outside service a post touches sits behind a single-method
//! capability trait:
//!
//! - [`IdentityProvider`]: authorization-code handshake ([`LinkedInClient`])
//! - [`Publisher`]: publish text for a connected member ([`LinkedInClient`])
//! - [`Notifier`]: e-mail text to a recipient ([`ResendNotifier`])
//! - [`GenerationService`]: produce a post remotely
//!   ([`RemoteGenerationService`]) or locally ([`NewsGenerationService`])
//!
//! Each call makes exactly one request. Failures are reported as
//! [`GatewayError`], classified by [`ErrorKind`].

pub mod capabilities;
pub mod config;
pub mod email;
pub mod error;
pub mod generation;
pub mod linkedin;

pub use capabilities::{
    Connection, GeneratedPost, GenerationService, IdentityProvider, NotifyReceipt, Notifier,
    Profile, PublishReceipt, Publisher,
};
pub use config::{GatewayConfig, LinkedInConfig, ResendConfig};
pub use email::{EmailRequest, ResendNotifier};
pub use error::{ErrorKind, GatewayError, GatewayResult};
pub use generation::{GenerationResponse, NewsGenerationService, RemoteGenerationService};
pub use linkedin::{AccessToken, LinkedInClient};
