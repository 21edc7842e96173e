use crate::api::ApiError;

/// Lifecycle of a backend-fetched resource.
///
/// Every screen that loads data holds one of these instead of its own
/// loading/error/data triple. A fresh page starts in `Loading` because the
/// first fetch is issued as the page is entered.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Resource<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Resource::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Loading
    }
}
