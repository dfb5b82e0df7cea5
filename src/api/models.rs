use serde::{Deserialize, Serialize};

use crate::types::{Provider, Timeframe, Usecase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatPayload {
    pub provider: Provider,
    pub model: String,
    pub usecase: Usecase,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub content: String,
    #[serde(default)]
    pub from_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsPayload {
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsReply {
    pub summary: String,
    #[serde(default)]
    pub saved_file: Option<String>,
    #[serde(default)]
    pub from_cache: bool,
}
