use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("identifier must not be empty")]
    EmptyId,
    #[error("specification name must not be empty")]
    EmptyName,
    #[error("value label must not be empty")]
    EmptyLabel,
    #[error("a specification named '{0}' already exists")]
    DuplicateSpecName(String),
    #[error("specification '{spec}' already has a value labeled '{label}'")]
    DuplicateValueLabel { spec: String, label: String },
    #[error("no specification with id '{0}'")]
    UnknownSpec(String),
    #[error("no value with id '{value}' in specification '{spec}'")]
    UnknownValue { spec: String, value: String },
    #[error("position {position} is out of bounds for a catalog of {len} specifications")]
    PositionOutOfBounds { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
