use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuirkError {
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Unknown hardpoint type: {0}")]
    UnknownHardpoint(String),

    #[error("No omnipod for variant {variant} at {component}")]
    MissingPod { variant: String, component: String },

    #[error("Quirk {name} has non-numeric value: {value}")]
    BadQuirkValue { name: String, value: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuirkError>;
