//! # Prelude — Re-exportações Convenientes
//!
//! Importação única para usar o OSL-Core:
//!
//! ```
//! use osl_core::prelude::*;
//! ```

// Estado
pub use crate::state::{Layer, NUM_LAYERS, StateVector, clamp01};

// Operadores
pub use crate::operator::{Effect, EffectMode, Operator, OperatorId, OperatorRegistry};

// Overrides
pub use crate::overrides::{OverrideMatrix, OverrideRule};

// Cláusulas
pub use crate::clause::{Clause, ClauseId, ClauseRegistry, Strictness, Transparency, Typology};

// Erros
pub use crate::error::{CatalogError, CatalogResult};

// Exportação
pub use crate::export::{default_filename, to_json_pretty};
