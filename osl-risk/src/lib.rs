//! # ⚖️ osl-risk — Projeção de Tipologias
//!
//! Projeta o estado final (variante de operadores) ou um conjunto de
//! cláusulas (variante pareada) sobre o vetor de tipologias de risco.
//! Pesos são configuração estática, nunca computados.
//!
//! ## Regras
//!
//! **Operadores — combinação linear fixa das camadas finais:**
//! - `DG = 0.3·P + 0.4·A + 0.3·ε`
//! - `RT = 0.4·R + 0.3·V + 0.3·ε`
//! - `CI = 0.6·V + 0.4·L`
//! - `SE = 0.25·(L + P + A + R)`
//!
//! **Cláusulas — soma de `risk_level` por tag, normalizada pelo máximo**
//! (o maior score de uma projeção é sempre exatamente 1.0, salvo vetor
//! todo-zero).
//!
//! **Dominante — score estritamente maior; empate resolvido pela ordem
//! declarada das tipologias (DG, RT, CI, SE), vencendo a primeira.**

use osl_core::clause::Clause;
use osl_core::state::{NUM_LAYERS, StateVector};
use osl_core::Typology;
use serde::{Deserialize, Serialize};

/// Vetor de scores por tipologia
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskVector {
    #[serde(rename = "DG")]
    pub dg: f64,
    #[serde(rename = "RT")]
    pub rt: f64,
    #[serde(rename = "CI")]
    pub ci: f64,
    #[serde(rename = "SE")]
    pub se: f64,
}

impl RiskVector {
    /// Vetor todo-zero (resultado de entrada vazia)
    pub const fn zero() -> Self {
        Self { dg: 0.0, rt: 0.0, ci: 0.0, se: 0.0 }
    }

    /// Score de uma tipologia
    #[inline]
    pub const fn get(&self, typology: Typology) -> f64 {
        match typology {
            Typology::DG => self.dg,
            Typology::RT => self.rt,
            Typology::CI => self.ci,
            Typology::SE => self.se,
        }
    }

    #[inline]
    pub const fn set(&mut self, typology: Typology, score: f64) {
        match typology {
            Typology::DG => self.dg = score,
            Typology::RT => self.rt = score,
            Typology::CI => self.ci = score,
            Typology::SE => self.se = score,
        }
    }

    /// Maior score do vetor
    pub fn max_score(&self) -> f64 {
        Typology::ALL
            .iter()
            .map(|&t| self.get(t))
            .fold(0.0, f64::max)
    }

    /// Tipologia dominante
    ///
    /// Score estritamente maior vence; empates caem para a primeira
    /// tipologia na ordem declarada. Vetor todo-zero devolve a primeira.
    pub fn dominant(&self) -> Typology {
        let mut best = Typology::ALL[0];
        let mut best_score = self.get(best);
        for &t in &Typology::ALL[1..] {
            let score = self.get(t);
            if score > best_score {
                best = t;
                best_score = score;
            }
        }
        best
    }
}

impl Default for RiskVector {
    fn default() -> Self {
        Self::zero()
    }
}

/// Tabela de pesos de projeção: por tipologia, um peso por camada
///
/// Injetada no motor como configuração; [`ProjectionTable::default`]
/// carrega os pesos de referência.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionTable {
    /// Pesos na ordem canônica de camadas (L, P, A, R, V, ε)
    pub dg: [f64; NUM_LAYERS],
    pub rt: [f64; NUM_LAYERS],
    pub ci: [f64; NUM_LAYERS],
    pub se: [f64; NUM_LAYERS],
}

impl ProjectionTable {
    const fn weights(&self, typology: Typology) -> &[f64; NUM_LAYERS] {
        match typology {
            Typology::DG => &self.dg,
            Typology::RT => &self.rt,
            Typology::CI => &self.ci,
            Typology::SE => &self.se,
        }
    }

    /// Projeta o estado final sobre o vetor de tipologias
    pub fn project(&self, state: &StateVector) -> RiskVector {
        let layers = state.to_array();
        let mut out = RiskVector::zero();
        for &typology in &Typology::ALL {
            let weights = self.weights(typology);
            let score: f64 = layers
                .iter()
                .zip(weights.iter())
                .map(|(&v, &w)| v * w)
                .sum();
            out.set(typology, score);
        }
        out
    }
}

impl Default for ProjectionTable {
    fn default() -> Self {
        // Ordem: L, P, A, R, V, ε
        Self {
            dg: [0.0, 0.3, 0.4, 0.0, 0.0, 0.3],
            rt: [0.0, 0.0, 0.0, 0.4, 0.3, 0.3],
            ci: [0.4, 0.0, 0.0, 0.0, 0.6, 0.0],
            se: [0.25, 0.25, 0.25, 0.25, 0.0, 0.0],
        }
    }
}

/// Projeta um conjunto de cláusulas sobre o vetor de tipologias
///
/// Cada cláusula contribui seu `risk_level` para toda tipologia que
/// carrega como tag; ao final, todo score é dividido pelo máximo
/// observado (salvo vetor todo-zero), de modo que o maior score é
/// exatamente 1.0.
pub fn project_clauses<'a>(clauses: impl IntoIterator<Item = &'a Clause>) -> RiskVector {
    let mut out = RiskVector::zero();
    for clause in clauses {
        for &tag in &clause.tags {
            out.set(tag, out.get(tag) + clause.risk_level);
        }
    }

    let max = out.max_score();
    if max > 0.0 {
        for &t in &Typology::ALL {
            out.set(t, out.get(t) / max);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use osl_core::clause::ClauseRegistry;

    #[test]
    fn test_project_state_reference_weights() {
        let state = StateVector {
            legality: 0.89,
            privacy: 0.55,
            autonomy: 0.4,
            reciprocity: 0.2,
            visibility: 0.3936,
            entropy: 0.6,
        };
        let vector = ProjectionTable::default().project(&state);

        assert!((vector.dg - 0.505).abs() < 1e-9);
        assert!((vector.rt - 0.37808).abs() < 1e-9);
        assert!((vector.ci - 0.59216).abs() < 1e-9);
        assert!((vector.se - 0.51).abs() < 1e-9);
        assert_eq!(vector.dominant(), Typology::CI);
    }

    #[test]
    fn test_project_vacuum_is_zero() {
        let vector = ProjectionTable::default().project(&StateVector::vacuum());
        for &t in &Typology::ALL {
            assert_eq!(vector.get(t), 0.0);
        }
        // Todo-zero cai para a primeira tipologia declarada
        assert_eq!(vector.dominant(), Typology::DG);
    }

    #[test]
    fn test_dominant_tiebreak_declared_order() {
        let vector = RiskVector { dg: 0.4, rt: 0.7, ci: 0.7, se: 0.1 };
        // RT e CI empatam; RT vem antes na ordem declarada
        assert_eq!(vector.dominant(), Typology::RT);
    }

    #[test]
    fn test_project_clauses_normalized_to_one() {
        let registry = ClauseRegistry::reference();
        let clauses: Vec<_> = ["C1", "C2", "C4"]
            .iter()
            .map(|id| registry.get(&(*id).into()).unwrap())
            .collect();

        let vector = project_clauses(clauses.iter().copied());

        // DG = 0.8 + 0.9 = 1.7; RT = 0.9 + 0.85 = 1.75 (máximo)
        assert!((vector.rt - 1.0).abs() < 1e-12);
        assert!((vector.dg - 1.7 / 1.75).abs() < 1e-12);
        assert_eq!(vector.ci, 0.0);
        assert_eq!(vector.dominant(), Typology::RT);
    }

    #[test]
    fn test_project_clauses_empty_is_zero() {
        let vector = project_clauses(std::iter::empty());
        assert_eq!(vector, RiskVector::zero());
    }
}
