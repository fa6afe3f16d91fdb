//! # 🜂 osl-engine — Executor Sequencial OSL
//!
//! Motor determinístico: aplica o registro de operadores e a matriz de
//! override a uma sequência ordenada, agregando métricas derivadas.
//!
//! > *"Mesma entrada, mesma saída — a aleatoriedade, se existir,
//! > pertence a quem escolhe a sequência."*
//!
//! ## Responsabilidades
//! - Validar catálogos uma única vez, na construção
//! - Executar a sequência com semântica posicional de overrides
//! - Projetar o estado final sobre tipologias de risco
//! - Montar o resultado completo, serializável
//!
//! ## Uso
//!
//! ```
//! use osl_engine::Engine;
//!
//! let engine = Engine::reference();
//! let sequence = vec![Some("O1".into()), None, Some("O4".into())];
//! let result = engine.evaluate(&sequence).unwrap();
//!
//! assert_eq!(result.execution_trace.len(), 2);
//! ```

pub mod error;
pub mod executor;
pub mod result;

pub use error::{EvalError, EvalResult};
pub use executor::{ExecutionStep, PositionPolicy, execute};
pub use result::{
    ExecutionResult, autonomy_preserved, compliance_illusion_depth, decoherence_score,
    legal_validity,
};

use osl_core::operator::{OperatorId, OperatorRegistry};
use osl_core::overrides::OverrideMatrix;
use osl_core::state::StateVector;
use osl_risk::ProjectionTable;

/// Configuração do motor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    /// Política do multiplicador posicional
    pub position_policy: PositionPolicy,
    /// Tabela de pesos de projeção
    pub projection: ProjectionTable,
}

/// Motor de composição sequencial
///
/// Carrega catálogos imutáveis injetados na construção. Instâncias
/// distintas podem carregar catálogos distintos sem contaminação
/// cruzada — nenhum global mutável.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: OperatorRegistry,
    matrix: OverrideMatrix,
    config: EngineConfig,
}

impl Engine {
    /// Cria o motor, validando a matriz contra o registro — uma vez,
    /// nunca por avaliação
    pub fn new(
        registry: OperatorRegistry,
        matrix: OverrideMatrix,
        config: EngineConfig,
    ) -> EvalResult<Self> {
        matrix.validate(&registry)?;
        Ok(Self { registry, matrix, config })
    }

    /// Motor com os catálogos de referência
    pub fn reference() -> Self {
        Self::new(
            OperatorRegistry::reference(),
            OverrideMatrix::reference(),
            EngineConfig::default(),
        )
        .expect("reference catalogs are valid")
    }

    /// Registro de operadores
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Matriz de override
    pub fn matrix(&self) -> &OverrideMatrix {
        &self.matrix
    }

    /// Configuração
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Avalia a sequência a partir do estado de referência
    pub fn evaluate(&self, sequence: &[Option<OperatorId>]) -> EvalResult<ExecutionResult> {
        self.evaluate_from(sequence, StateVector::baseline())
    }

    /// Avalia a sequência a partir de um estado inicial dado
    ///
    /// Função pura: sem I/O, sem bloqueio, sem estado compartilhado.
    /// Cada chamada devolve um resultado completo e independente.
    pub fn evaluate_from(
        &self,
        sequence: &[Option<OperatorId>],
        initial: StateVector,
    ) -> EvalResult<ExecutionResult> {
        let (final_state, trace) = execute(
            sequence,
            &self.registry,
            &self.matrix,
            self.config.position_policy,
            initial,
        )?;

        let risk = if trace.is_empty() {
            // Entrada vazia: projeção zero, não projeção do estado inicial
            osl_risk::RiskVector::zero()
        } else {
            self.config.projection.project(&final_state)
        };

        Ok(ExecutionResult::assemble(
            sequence.to_vec(),
            final_state,
            risk,
            trace,
        ))
    }
}

#[cfg(test)]
mod tests;
