//! Tipos de erro para osl-engine

use osl_core::error::CatalogError;
use thiserror::Error;

/// Resultado de avaliação
pub type EvalResult<T> = Result<T, EvalError>;

/// Erros de avaliação de sequência
///
/// Sequência vazia não é erro: devolve resultado zero válido.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    /// Elemento da sequência não existe no registro — falha rápida,
    /// nunca tratado silenciosamente como slot vazio
    #[error("sequence references unknown operator: {0}")]
    UnknownReference(String),

    /// Catálogo inválido detectado na construção do motor
    #[error("catalog configuration error: {0}")]
    Configuration(#[from] CatalogError),
}
