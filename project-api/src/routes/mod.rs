pub(crate) mod error;
pub(crate) mod health;
pub(crate) mod projects;

pub(crate) use error::ApiError;
