//! # Resultado de Execução e Métricas Derivadas
//!
//! O resultado é um valor completo, serializável, criado fresco a cada
//! avaliação e nunca mutado. Toda métrica derivada é função pura do
//! estado final.

use crate::executor::ExecutionStep;
use osl_core::export;
use osl_core::operator::OperatorId;
use osl_core::state::{NUM_LAYERS, StateVector};
use osl_core::Typology;
use osl_risk::RiskVector;
use serde::{Deserialize, Serialize};

/// Limiar de validade legal sobre a camada L
pub const LEGAL_VALIDITY_THRESHOLD: f64 = 0.5;

/// Limiar de preservação de autonomia sobre a camada A
pub const AUTONOMY_THRESHOLD: f64 = 0.3;

/// Decoerência: distância do estado assentado (todas as camadas em 1.0)
///
/// `1 − Σ camadas / 6`
pub fn decoherence_score(state: &StateVector) -> f64 {
    1.0 - state.sum() / NUM_LAYERS as f64
}

/// Profundidade da ilusão de conformidade
///
/// `1 − |L − V|` — quanto menor a distância entre legalidade e
/// visibilidade, mais profunda a ilusão.
pub fn compliance_illusion_depth(state: &StateVector) -> f64 {
    1.0 - (state.legality - state.visibility).abs()
}

/// Validade legal: L acima do limiar
pub fn legal_validity(state: &StateVector) -> bool {
    state.legality > LEGAL_VALIDITY_THRESHOLD
}

/// Autonomia preservada: A acima do limiar
pub fn autonomy_preserved(state: &StateVector) -> bool {
    state.autonomy > AUTONOMY_THRESHOLD
}

/// Resultado completo de uma avaliação de sequência de operadores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Eco da sequência de entrada (slots vazios preservados)
    pub sequence: Vec<Option<OperatorId>>,
    /// Estado final
    pub final_state: StateVector,
    /// Projeção sobre tipologias de risco
    pub risk_typology: RiskVector,
    /// Tipologia dominante
    pub dominant_typology: Typology,
    /// Decoerência do estado final
    pub decoherence_score: f64,
    /// Profundidade da ilusão de conformidade
    pub compliance_illusion_depth: f64,
    /// Validade legal
    pub legal_validity: bool,
    /// Autonomia preservada
    pub autonomy_preserved: bool,
    /// Traço ordenado de execução
    pub execution_trace: Vec<ExecutionStep>,
}

impl ExecutionResult {
    /// Monta o resultado a partir do estado final e do traço
    pub fn assemble(
        sequence: Vec<Option<OperatorId>>,
        final_state: StateVector,
        risk_typology: RiskVector,
        execution_trace: Vec<ExecutionStep>,
    ) -> Self {
        Self {
            sequence,
            final_state,
            dominant_typology: risk_typology.dominant(),
            decoherence_score: decoherence_score(&final_state),
            compliance_illusion_depth: compliance_illusion_depth(&final_state),
            legal_validity: legal_validity(&final_state),
            autonomy_preserved: autonomy_preserved(&final_state),
            risk_typology,
            execution_trace,
        }
    }

    /// Serializa como JSON UTF-8 pretty-printed
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        export::to_json_pretty(self)
    }

    /// Nome de arquivo padrão de exportação
    pub fn export_filename(&self) -> String {
        let parts: Vec<Option<String>> = self
            .sequence
            .iter()
            .map(|slot| slot.as_ref().map(|id| id.to_string()))
            .collect();
        export::default_filename(&parts)
    }
}
