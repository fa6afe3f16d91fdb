//! Tipos de erro para osl-core

use thiserror::Error;

/// Resultado de operações de catálogo
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Erros de validação de catálogo
///
/// Catálogos são estáticos: toda validação acontece uma única vez,
/// na construção, nunca por avaliação.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    #[error("override rule references unknown source operator: {0}")]
    UnknownOverrideSource(String),

    #[error("override rule references unknown target operator: {0}")]
    UnknownOverrideTarget(String),

    #[error("override rule references itself: {0}")]
    SelfOverride(String),

    #[error("effect strength out of [0,1] for {id}: {strength}")]
    StrengthOutOfRange { id: String, strength: f64 },

    #[error("risk level out of [0,1] for {id}: {risk}")]
    RiskOutOfRange { id: String, risk: f64 },
}
