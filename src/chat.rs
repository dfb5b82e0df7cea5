use serde::{Deserialize, Serialize};

use crate::api::models::{ChatPayload, ChatReply};
use crate::status::RequestStatus;
use crate::types::{Provider, Usecase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    SetProvider(Provider),
    SetModel(String),
    SetUsecase(Usecase),
    AddUserMessage(String),
    SendPending,
    SendFulfilled(ChatReply),
    SendRejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    messages: Vec<Message>,
    pub provider: Provider,
    pub model: String,
    pub usecase: Usecase,
    pub status: RequestStatus<ChatReply>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            provider: Provider::Groq,
            model: Provider::Groq.default_model().to_string(),
            usecase: Usecase::BasicChatbot,
            status: RequestStatus::Idle,
        }
    }
}

impl ChatState {
    /// Transcript in insertion order. Entries are only ever appended.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    pub fn payload(&self, message: &str) -> ChatPayload {
        ChatPayload {
            provider: self.provider,
            model: self.model.clone(),
            usecase: self.usecase,
            message: message.to_string(),
        }
    }

    pub fn reduce(&mut self, action: ChatAction) {
        match action {
            ChatAction::SetProvider(provider) => self.provider = provider,
            // Free text, any model id the server understands
            ChatAction::SetModel(model) => self.model = model,
            ChatAction::SetUsecase(usecase) => self.usecase = usecase,
            ChatAction::AddUserMessage(content) => self.messages.push(Message::user(content)),
            ChatAction::SendPending => self.status = RequestStatus::Pending,
            ChatAction::SendFulfilled(reply) => {
                self.messages.push(Message::assistant(reply.content.clone()));
                self.status = RequestStatus::Succeeded(reply);
            }
            // The user message stays in the transcript
            ChatAction::SendRejected(message) => self.status = RequestStatus::Failed(message),
        }
    }
}
