//! Contact enquiries: the form state machine shared by server and browser,
//! plus the server endpoint and delivery backends.

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod delivery;
mod form;

#[cfg(feature = "ssr")]
pub use api::contact_router;
#[cfg(feature = "ssr")]
pub use delivery::{ConfiguredSink, ContactSink, LogSink, WebhookSink};
pub use form::*;
