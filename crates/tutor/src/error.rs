use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TutorError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("backend returned an empty reply")]
    EmptyReply,
    #[error("conversation has no messages")]
    EmptyConversation,
}
