use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::api::ApiClient;
use crate::api::models::{ChatReply, NewsReply};
use crate::chat::{ChatAction, ChatState};
use crate::news::{NewsAction, NewsState};
use crate::status::RequestStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Chat(ChatAction),
    News(NewsAction),
}

impl From<ChatAction> for Action {
    fn from(action: ChatAction) -> Self {
        Action::Chat(action)
    }
}

impl From<NewsAction> for Action {
    fn from(action: NewsAction) -> Self {
        Action::News(action)
    }
}

/// The whole state tree. Slices never see each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub chat: ChatState,
    pub news: NewsState,
}

impl Store {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Chat(action) => self.chat.reduce(action),
            Action::News(action) => self.news.reduce(action),
        }
    }
}

/// Shared owner of the store plus the client the thunks talk to.
///
/// The lock is taken for exactly one reducer call or read and is never held
/// across an await, so a request in flight never blocks dispatch.
#[derive(Clone)]
pub struct StoreHandle {
    store: Arc<Mutex<Store>>,
    api: ApiClient,
}

impl StoreHandle {
    pub fn new(api: ApiClient) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
            api,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // Reducers don't panic midway, so a poisoned store is still consistent
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        self.lock().reduce(action.into());
    }

    pub fn select<R>(&self, selector: impl FnOnce(&Store) -> R) -> R {
        selector(&self.lock())
    }

    pub fn snapshot(&self) -> Store {
        self.lock().clone()
    }

    /// Echoes `content` into the transcript, then asks the server for a
    /// reply using the current provider/model/usecase. The outcome is applied
    /// to the chat slice and returned; failures are never raised as errors.
    pub async fn send_message(&self, content: &str) -> RequestStatus<ChatReply> {
        let payload = {
            let mut store = self.lock();
            store.chat.reduce(ChatAction::AddUserMessage(content.to_string()));
            let payload = store.chat.payload(content);
            store.chat.reduce(ChatAction::SendPending);
            payload
        };

        match self.api.chat(&payload).await {
            Ok(reply) => {
                info!(
                    provider = %payload.provider,
                    model = %payload.model,
                    from_cache = reply.from_cache,
                    "chat reply received"
                );
                self.dispatch(ChatAction::SendFulfilled(reply.clone()));
                RequestStatus::Succeeded(reply)
            }
            Err(err) => {
                let message = err.to_string();
                info!(provider = %payload.provider, error = %message, "chat request failed");
                self.dispatch(ChatAction::SendRejected(message.clone()));
                RequestStatus::Failed(message)
            }
        }
    }

    /// Requests a summary for the selected timeframe. A failure keeps the
    /// previous summary in place.
    pub async fn fetch_news(&self) -> RequestStatus<NewsReply> {
        let payload = {
            let mut store = self.lock();
            let payload = store.news.payload();
            store.news.reduce(NewsAction::FetchPending);
            payload
        };

        match self.api.news_summary(&payload).await {
            Ok(reply) => {
                info!(
                    timeframe = %payload.timeframe,
                    from_cache = reply.from_cache,
                    "news summary received"
                );
                self.dispatch(NewsAction::FetchFulfilled(reply.clone()));
                RequestStatus::Succeeded(reply)
            }
            Err(err) => {
                let message = err.to_string();
                info!(timeframe = %payload.timeframe, error = %message, "news request failed");
                self.dispatch(NewsAction::FetchRejected(message.clone()));
                RequestStatus::Failed(message)
            }
        }
    }
}
