/// Lifecycle of one independently fetched collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Request issued, not settled yet
    Loading,
    /// Request succeeded
    Loaded(T),
    /// Request failed; holds a message fit for display
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

/// What a collection section should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    Loading,
    Empty,
    Ready,
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Option<Result<T, E>>> for LoadState<T> {
    /// A pending resource (`None`) is still loading.
    fn from(value: Option<Result<T, E>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(data)) => LoadState::Loaded(data),
            Some(Err(e)) => LoadState::Failed(e.to_string()),
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Classify into loading, loaded-empty, loaded-nonempty or failed.
    pub fn status(&self) -> CollectionStatus {
        match self {
            LoadState::Loading => CollectionStatus::Loading,
            LoadState::Loaded(items) if items.is_empty() => CollectionStatus::Empty,
            LoadState::Loaded(_) => CollectionStatus::Ready,
            LoadState::Failed(_) => CollectionStatus::Failed,
        }
    }

    /// Loaded items, or an empty slice while loading or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }
}
