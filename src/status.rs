/// Lifecycle of a slice's request: idle, then pending, then settled.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestStatus<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestStatus::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}
