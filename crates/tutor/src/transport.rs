use crate::conversation::ChatMessage;
use crate::error::TutorError;

/// One round trip to the tutor backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorRequest {
    pub model: String,
    pub system_instruction: String,
    /// Every message before the prompt, oldest first.
    pub history: Vec<ChatMessage>,
    pub prompt: String,
}

pub trait Transport {
    fn send(&self, api_key: &str, request: &TutorRequest) -> Result<String, TutorError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, api_key: &str, request: &TutorRequest) -> Result<String, TutorError> {
        (**self).send(api_key, request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, api_key: &str, request: &TutorRequest) -> Result<String, TutorError> {
        (**self).send(api_key, request)
    }
}

/// Stand-in when no HTTP backend is compiled in; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Transport for Unavailable {
    fn send(&self, _api_key: &str, _request: &TutorRequest) -> Result<String, TutorError> {
        Err(TutorError::Transport("no HTTP transport compiled in".to_string()))
    }
}
