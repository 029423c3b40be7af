use entity::backend::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error("Fixture references unknown user {0:?}")]
    UnknownUser(String),
}
