//! Closed selection types shared by the chat and news slices.
//!
//! Each value serializes with the exact label the API expects and parses
//! case-insensitively from either that label or a short alias.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    Groq,
    Ollama,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Groq => "Groq",
            Provider::Ollama => "Ollama",
        }
    }

    pub fn all() -> Vec<Provider> {
        vec![Provider::Groq, Provider::Ollama]
    }

    /// Models offered for this provider, first entry is the default.
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Provider::Groq => &[
                "llama3-8b-8192",
                "llama3-70b-8192",
                "mixtral-8x7b-32768",
                "gemma-7b-it",
            ],
            Provider::Ollama => &[
                "llama3.2:1b",
                "llama3.2:3b",
                "llama3:8b",
                "mistral:7b",
                "codellama:13b",
            ],
        }
    }

    pub fn default_model(&self) -> &'static str {
        self.models()[0]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(Provider::Groq),
            "ollama" => Ok(Provider::Ollama),
            _ => Err(AppError::ParseError(format!("Unknown provider: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Usecase {
    #[default]
    #[serde(rename = "Basic Chatbot")]
    BasicChatbot,
    #[serde(rename = "Chatbot With Web")]
    ChatbotWithWeb,
}

impl Usecase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Usecase::BasicChatbot => "Basic Chatbot",
            Usecase::ChatbotWithWeb => "Chatbot With Web",
        }
    }

    pub fn all() -> Vec<Usecase> {
        vec![Usecase::BasicChatbot, Usecase::ChatbotWithWeb]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Usecase::BasicChatbot => "Simple chat with the selected model",
            Usecase::ChatbotWithWeb => "Chat with web search capabilities",
        }
    }
}

impl fmt::Display for Usecase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Usecase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic chatbot" | "basic" => Ok(Usecase::BasicChatbot),
            "chatbot with web" | "web" => Ok(Usecase::ChatbotWithWeb),
            _ => Err(AppError::ParseError(format!("Unknown usecase: {}", s))),
        }
    }
}

/// Lookback window for the news summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "last 24 hours")]
    LastDay,
    #[serde(rename = "last 3 days")]
    LastThreeDays,
    #[serde(rename = "last week")]
    LastWeek,
    #[serde(rename = "last month")]
    LastMonth,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::LastDay => "last 24 hours",
            Timeframe::LastThreeDays => "last 3 days",
            Timeframe::LastWeek => "last week",
            Timeframe::LastMonth => "last month",
        }
    }

    pub fn all() -> Vec<Timeframe> {
        vec![
            Timeframe::LastDay,
            Timeframe::LastThreeDays,
            Timeframe::LastWeek,
            Timeframe::LastMonth,
        ]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last 24 hours" | "day" | "daily" => Ok(Timeframe::LastDay),
            "last 3 days" | "3days" | "3 days" => Ok(Timeframe::LastThreeDays),
            "last week" | "week" | "weekly" => Ok(Timeframe::LastWeek),
            "last month" | "month" | "monthly" => Ok(Timeframe::LastMonth),
            _ => Err(AppError::ParseError(format!("Unknown timeframe: {}", s))),
        }
    }
}
