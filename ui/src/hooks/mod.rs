pub mod use_logout;
pub mod use_mounted;
pub mod use_properties;
pub mod use_property;

pub use use_logout::use_logout;
pub use use_mounted::{MountedFlag, use_mounted};
pub use use_properties::use_properties;
pub use use_property::use_property;

/// Result of a request that populates part of the page.
///
/// Failure is a state of its own so views can offer a retry instead of
/// showing an empty result.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}
