use crate::host::Collaborator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing collaborator: {0} not found")]
    MissingCollaborator(Collaborator),
}

pub type Result<T> = std::result::Result<T, Error>;
