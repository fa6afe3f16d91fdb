//! # Executor Sequencial
//!
//! Aplica registro + matriz de override a uma sequência ordenada,
//! produzindo o traço passo a passo e o estado final.
//!
//! ## Regras
//!
//! - Slot vazio é pulado, mas preserva a posição (e o índice usado
//!   pelo multiplicador posicional).
//! - Um passo é `nullified` sse algum elemento anterior carrega regra
//!   de override mirando seu id — um salto, nunca transitivo.
//! - `Δ = strength × multiplicador(índice)`; o resultado de cada modo
//!   é clampado conforme documentado e armazenado de volta.
//! - Nenhuma aleatoriedade: mesma entrada, mesma saída, bit a bit.

use crate::error::{EvalError, EvalResult};
use osl_core::operator::{OperatorId, OperatorRegistry};
use osl_core::overrides::OverrideMatrix;
use osl_core::state::StateVector;
use serde::{Deserialize, Serialize};

/// Política do multiplicador posicional
///
/// O multiplicador é função pura do índice. A curva de referência
/// amplifica apenas a primeira posição (1.3×); a curva exata é um
/// parâmetro substituível, não uma regra fixa do motor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum PositionPolicy {
    /// Índice 0 recebe `factor`, demais recebem 1.0
    FirstAmplified { factor: f64 },
    /// Todo índice recebe 1.0
    Uniform,
}

impl PositionPolicy {
    /// Multiplicador para o índice dado
    #[inline]
    pub fn multiplier(&self, index: usize) -> f64 {
        match *self {
            PositionPolicy::FirstAmplified { factor } if index == 0 => factor,
            _ => 1.0,
        }
    }
}

impl Default for PositionPolicy {
    fn default() -> Self {
        PositionPolicy::FirstAmplified { factor: 1.3 }
    }
}

/// Um passo do traço de execução
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// Índice do slot na sequência
    pub index: usize,
    /// Operador referenciado
    pub operator: OperatorId,
    /// Estado antes do passo
    pub before: StateVector,
    /// Estado depois do passo
    pub after: StateVector,
    /// Efeito anulado por override anterior?
    pub nullified: bool,
    /// Multiplicador posicional aplicado
    pub multiplier: f64,
}

/// Executa a sequência sobre o estado inicial
///
/// Valida toda referência contra o registro antes de aplicar qualquer
/// passo: referência desconhecida falha rápido, sem efeito parcial.
pub fn execute(
    sequence: &[Option<OperatorId>],
    registry: &OperatorRegistry,
    matrix: &OverrideMatrix,
    policy: PositionPolicy,
    initial: StateVector,
) -> EvalResult<(StateVector, Vec<ExecutionStep>)> {
    let mut resolved = Vec::with_capacity(sequence.len());
    for slot in sequence {
        match slot {
            None => resolved.push(None),
            Some(id) => match registry.get(id) {
                Some(operator) => resolved.push(Some((id, operator))),
                None => return Err(EvalError::UnknownReference(id.to_string())),
            },
        }
    }

    let mut state = initial;
    let mut trace = Vec::new();

    for (index, slot) in resolved.iter().enumerate() {
        let Some(&(id, operator)) = slot.as_ref() else { continue };

        let before = state;
        let nullified = sequence[..index]
            .iter()
            .flatten()
            .any(|earlier| matrix.overrides(earlier, id));
        let multiplier = policy.multiplier(index);

        if !nullified {
            for effect in &operator.effects {
                let delta = effect.strength * multiplier;
                let current = state.get(effect.layer);
                state.set_layer(effect.layer, effect.mode.apply(current, delta));
            }
        }

        trace.push(ExecutionStep {
            index,
            operator: id.clone(),
            before,
            after: state,
            nullified,
            multiplier,
        });
    }

    Ok((state, trace))
}
