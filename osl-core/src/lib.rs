//! # 🜁 OSL-Core
//!
//! Implementação do padrão OSL (Operator Sequence Lattice).
//!
//! > *"A ordem dos operadores altera o produto — composição sequencial
//! > não-comutativa sobre um estado de seis camadas."*
//!
//! ## O Padrão OSL
//!
//! 1. Todo estado é um **vetor de 6 camadas** (L, P, A, R, V, ε)
//! 2. Cada elemento do catálogo declara **efeitos** ou **tags de tipologia**
//! 3. O programa é uma **sequência ordenada** de referências ao catálogo
//! 4. Overrides são **direcionais e posicionais**: quem vem antes suprime
//!
//! ## Computational Complexity
//!
//! **Catalog lookup — O(1):** hash-indexed registries, built once.
//!
//! **Sequence evaluation — O(n × m):**
//! - n = sequence length, m = override rules checked per step
//! - Each step touches at most 6 fixed layers
//!
//! **Scalability:** ✓ Excellent — sequences are human-sized (n < 16)
//!
//! ## Módulos
//!
//! - [`state`]: StateVector — estado de 6 camadas nomeadas
//! - [`operator`]: Operadores, modos de efeito e registro
//! - [`overrides`]: Matriz direcional de supressão
//! - [`clause`]: Cláusulas, tipologias e registro (variante pareada)
//! - [`export`]: JSON pretty-printed e nome de arquivo padrão
//!
//! ## Quick Start
//!
//! ```
//! use osl_core::prelude::*;
//!
//! let registry = OperatorRegistry::reference();
//! let matrix = OverrideMatrix::reference();
//! matrix.validate(&registry).unwrap();
//!
//! let state = StateVector::baseline();
//! assert_eq!(state.get(Layer::Entropy), 0.2);
//! ```

pub mod clause;
pub mod error;
pub mod export;
pub mod operator;
pub mod overrides;
pub mod prelude;
pub mod state;

pub use clause::{Clause, ClauseId, ClauseRegistry, Strictness, Transparency, Typology};
pub use error::{CatalogError, CatalogResult};
pub use operator::{Effect, EffectMode, Operator, OperatorId, OperatorRegistry};
pub use overrides::{OverrideMatrix, OverrideRule};
pub use state::{Layer, NUM_LAYERS, StateVector};
