use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("incorrect input json: {0}")]
    InputShape(String),

    #[error("record already exists")]
    Duplicate,

    #[error("entered incorrect year")]
    BadYear,

    #[error("no results, entered incorrect symbol")]
    EmptyResult,

    #[error("store corrupt: {0}")]
    StoreCorrupt(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Io(format!("CSV error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
