//! Tipos de erro para osl-clause

use osl_core::error::CatalogError;
use thiserror::Error;

/// Resultado de análise de cláusulas
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Erros da variante de cláusulas
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClauseError {
    /// Elemento da sequência não existe no registro de cláusulas
    #[error("sequence references unknown clause: {0}")]
    UnknownReference(String),

    /// Catálogo inválido detectado na construção
    #[error("catalog configuration error: {0}")]
    Configuration(#[from] CatalogError),
}
