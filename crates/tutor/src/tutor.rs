use tracing::{debug, warn};

use crate::config::TutorConfig;
use crate::conversation::ChatMessage;
use crate::error::TutorError;
use crate::transport::{Transport, TutorRequest, Unavailable};

pub const MISSING_CREDENTIAL_REPLY: &str = "Please configure your API_KEY to use the AI Tutor.";
pub const EMPTY_REPLY: &str = "I'm having a bit of trouble thinking right now. Try again?";
pub const TRANSPORT_FAILURE_REPLY: &str =
    "Sorry, I encountered an error connecting to the knowledge base.";

/// The tutor's standing instructions while `algorithm_name` is on screen.
pub fn system_instruction(algorithm_name: &str) -> String {
    format!(
        "You are a helpful and gentle Computer Science tutor specialized in algorithms.\n\
         The user is currently visualizing {algorithm_name}.\n\
         Keep your explanations concise, encouraging, and easy to understand for a beginner.\n\
         Avoid complex jargon unless you explain it.\n\
         If asked about the current state of the visualization, explain the general concept of the step.\n\
         Use Markdown for formatting code or key terms."
    )
}

pub struct Tutor<T> {
    config: TutorConfig,
    transport: T,
}

impl Tutor<Box<dyn Transport>> {
    /// Credential from the environment and the HTTP transport when the
    /// `http` feature is enabled.
    pub fn from_env() -> Self {
        let config = TutorConfig::from_env();
        let transport = default_transport(&config);
        Self::new(config, transport)
    }
}

#[cfg(feature = "http")]
fn default_transport(config: &TutorConfig) -> Box<dyn Transport> {
    match crate::gemini::GeminiTransport::new(config) {
        Ok(transport) => Box::new(transport),
        Err(e) => {
            warn!(error = %e, "could not build HTTP transport");
            Box::new(Unavailable)
        }
    }
}

#[cfg(not(feature = "http"))]
fn default_transport(_config: &TutorConfig) -> Box<dyn Transport> {
    Box::new(Unavailable)
}

impl<T: Transport> Tutor<T> {
    pub fn new(config: TutorConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    /// Answers the last message of `messages`. Never fails: problems turn
    /// into a short placeholder fit for display.
    pub fn reply(&self, messages: &[ChatMessage], algorithm_name: &str) -> String {
        match self.try_reply(messages, algorithm_name) {
            Ok(text) => text,
            Err(TutorError::MissingCredential) => {
                warn!("tutor asked without an API credential");
                MISSING_CREDENTIAL_REPLY.to_string()
            }
            Err(TutorError::EmptyReply) => EMPTY_REPLY.to_string(),
            Err(e) => {
                warn!(error = %e, algorithm = algorithm_name, "tutor request failed");
                TRANSPORT_FAILURE_REPLY.to_string()
            }
        }
    }

    pub fn try_reply(&self, messages: &[ChatMessage], algorithm_name: &str) -> Result<String, TutorError> {
        let api_key = self.config.api_key.as_deref().ok_or(TutorError::MissingCredential)?;
        let request = self.request(messages, algorithm_name)?;
        debug!(
            model = %request.model,
            history = request.history.len(),
            "sending tutor request"
        );
        let text = self.transport.send(api_key, &request)?;
        if text.trim().is_empty() {
            return Err(TutorError::EmptyReply);
        }
        Ok(text)
    }

    fn request(&self, messages: &[ChatMessage], algorithm_name: &str) -> Result<TutorRequest, TutorError> {
        let (last, history) = messages.split_last().ok_or(TutorError::EmptyConversation)?;
        Ok(TutorRequest {
            model: self.config.model.clone(),
            system_instruction: system_instruction(algorithm_name),
            history: history.to_vec(),
            prompt: last.text.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::conversation::Conversation;

    /// Replays canned results and records what it was sent.
    struct Mock {
        replies: RefCell<Vec<Result<String, TutorError>>>,
        seen: RefCell<Vec<(String, TutorRequest)>>,
    }

    impl Mock {
        fn new(replies: Vec<Result<String, TutorError>>) -> Self {
            Self {
                replies: RefCell::new(replies),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Mock {
        fn send(&self, api_key: &str, request: &TutorRequest) -> Result<String, TutorError> {
            self.seen.borrow_mut().push((api_key.to_string(), request.clone()));
            self.replies.borrow_mut().remove(0)
        }
    }

    fn keyed() -> TutorConfig {
        TutorConfig::default().with_api_key("secret")
    }

    #[test]
    fn sends_history_and_prompt() {
        let mock = Mock::new(vec![Ok("Pivots split the range.".to_string())]);
        let tutor = Tutor::new(keyed(), &mock);
        let mut chat = Conversation::new("Quick Sort");
        let answer = chat.ask(&tutor, "What is a pivot?").map(str::to_string);
        assert_eq!(answer.as_deref(), Some("Pivots split the range."));

        let seen = mock.seen.borrow();
        let (key, request) = &seen[0];
        assert_eq!(key, "secret");
        assert_eq!(request.prompt, "What is a pivot?");
        assert_eq!(request.history, vec![chat.messages()[0].clone()]);
        assert!(request.system_instruction.contains("visualizing Quick Sort"));
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn missing_credential_skips_the_transport() {
        let mock = Mock::new(vec![]);
        let tutor = Tutor::new(TutorConfig::default(), &mock);
        let reply = tutor.reply(&[ChatMessage::user("hi")], "Kruskal's Algorithm");
        assert_eq!(reply, MISSING_CREDENTIAL_REPLY);
        assert!(mock.seen.borrow().is_empty());
    }

    #[test]
    fn failures_become_placeholders() {
        let mock = Mock::new(vec![
            Ok("   ".to_string()),
            Err(TutorError::Transport("timeout".to_string())),
        ]);
        let tutor = Tutor::new(keyed(), &mock);
        let messages = [ChatMessage::user("hi")];
        assert_eq!(tutor.reply(&messages, "BFS"), EMPTY_REPLY);
        assert_eq!(tutor.reply(&messages, "BFS"), TRANSPORT_FAILURE_REPLY);
    }

    #[test]
    fn empty_conversation_is_an_error() {
        let tutor = Tutor::new(keyed(), Unavailable);
        assert_eq!(tutor.try_reply(&[], "BFS"), Err(TutorError::EmptyConversation));
        assert_eq!(tutor.reply(&[], "BFS"), TRANSPORT_FAILURE_REPLY);
    }

    #[test]
    fn blank_questions_are_ignored() {
        let tutor = Tutor::new(keyed(), Unavailable);
        let mut chat = Conversation::new("DFS");
        assert!(chat.ask(&tutor, "  ").is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn unavailable_transport_apologizes() {
        let tutor = Tutor::new(keyed(), Unavailable);
        let mut chat = Conversation::new("DFS");
        assert_eq!(chat.ask(&tutor, "why?"), Some(TRANSPORT_FAILURE_REPLY));
    }
}
