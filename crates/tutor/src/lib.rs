//! algoviz-tutor - the chat tutor that sits beside a visualization.
//!
//! A [`Conversation`] holds the chat for one algorithm. [`Tutor::reply`]
//! turns it into a request for a [`Transport`] and always comes back with
//! something to show: a real answer, or a short placeholder when the
//! credential is missing or the backend misbehaves.
//!
//! Enable the `http` feature for [`gemini::GeminiTransport`].

pub mod config;
pub mod conversation;
pub mod error;
#[cfg(feature = "http")]
pub mod gemini;
pub mod transport;
pub mod tutor;

pub use config::TutorConfig;
pub use conversation::{ChatMessage, Conversation, Role};
pub use error::TutorError;
pub use transport::{Transport, TutorRequest, Unavailable};
pub use tutor::Tutor;
