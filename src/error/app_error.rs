use std::fmt;

use crate::models::Alert;

#[derive(Debug)]
pub enum AppError {
    StorageError(std::io::Error),
    SerializationError(serde_json::Error),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::StorageError(e) => write!(f, "Erro de armazenamento: {}", e),
            AppError::SerializationError(e) => write!(f, "Erro ao processar os dados: {}", e),
            AppError::BadRequest(msg) => write!(f, "Requisição inválida: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err)
    }
}

impl From<AppError> for Alert {
    fn from(err: AppError) -> Alert {
        let message = match err {
            AppError::StorageError(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                "Não foi possível salvar os dados do inventário".to_string()
            }
            AppError::SerializationError(ref e) => {
                tracing::error!("Serialization error: {}", e);
                "Não foi possível salvar os dados do inventário".to_string()
            }
            AppError::BadRequest(msg) => msg,
        };

        Alert::error(message)
    }
}
