use serde::{Deserialize, Serialize};

use crate::tutor::Tutor;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// The chat shown next to one algorithm; starts with the tutor's greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    algorithm: String,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(algorithm_name: impl Into<String>) -> Self {
        let algorithm = algorithm_name.into();
        let greeting = format!("Hi! I'm your algorithm tutor. Ask me anything about {algorithm}!");
        Self {
            algorithm,
            messages: vec![ChatMessage::model(greeting)],
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Switching algorithms starts over with a fresh greeting.
    pub fn reset(&mut self, algorithm_name: impl Into<String>) {
        *self = Self::new(algorithm_name);
    }

    /// Appends `question`, asks `tutor` and appends its answer.
    ///
    /// Blank questions are ignored and return `None`.
    pub fn ask<T: Transport>(&mut self, tutor: &Tutor<T>, question: &str) -> Option<&str> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        self.push(ChatMessage::user(question));
        let answer = tutor.reply(&self.messages, &self.algorithm);
        self.push(ChatMessage::model(answer));
        self.messages.last().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_a_greeting() {
        let chat = Conversation::new("Quick Sort");
        assert_eq!(
            chat.messages(),
            &[ChatMessage::model("Hi! I'm your algorithm tutor. Ask me anything about Quick Sort!")]
        );
    }

    #[test]
    fn reset_replaces_history() {
        let mut chat = Conversation::new("Quick Sort");
        chat.push(ChatMessage::user("why?"));
        chat.reset("Merge Sort");
        assert_eq!(chat.algorithm(), "Merge Sort");
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"hi"}"#);
    }
}
