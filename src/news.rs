use chrono::{DateTime, Utc};

use crate::api::models::{NewsPayload, NewsReply};
use crate::status::RequestStatus;
use crate::types::Timeframe;

#[derive(Debug, Clone, PartialEq)]
pub enum NewsAction {
    SetTimeframe(Timeframe),
    FetchPending,
    FetchFulfilled(NewsReply),
    FetchRejected(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsState {
    pub timeframe: Timeframe,
    /// Latest successful summary. Survives failed refetches.
    pub summary: Option<String>,
    pub saved_file: Option<String>,
    pub from_cache: bool,
    pub fetched_at: Option<DateTime<Utc>>,
    pub status: RequestStatus<NewsReply>,
}

impl NewsState {
    pub fn loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    pub fn payload(&self) -> NewsPayload {
        NewsPayload {
            timeframe: self.timeframe,
        }
    }

    pub fn reduce(&mut self, action: NewsAction) {
        match action {
            NewsAction::SetTimeframe(timeframe) => self.timeframe = timeframe,
            NewsAction::FetchPending => self.status = RequestStatus::Pending,
            NewsAction::FetchFulfilled(reply) => {
                self.summary = Some(reply.summary.clone());
                self.saved_file = reply.saved_file.clone();
                self.from_cache = reply.from_cache;
                self.fetched_at = Some(Utc::now());
                self.status = RequestStatus::Succeeded(reply);
            }
            NewsAction::FetchRejected(message) => self.status = RequestStatus::Failed(message),
        }
    }
}
