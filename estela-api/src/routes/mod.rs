pub(crate) mod entries;
pub(crate) mod error;
pub(crate) mod live;
pub(crate) mod pages;
pub(crate) mod preferences;
pub(crate) mod users;

pub(crate) use error::ApiError;
