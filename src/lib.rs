pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod news;
pub mod status;
pub mod store;
pub mod types;

pub use api::ApiClient;
pub use chat::{ChatAction, ChatState, Message, Role};
pub use config::Config;
pub use error::{AppError, Result};
pub use news::{NewsAction, NewsState};
pub use status::RequestStatus;
pub use store::{Action, Store, StoreHandle};
pub use types::{Provider, Timeframe, Usecase};
