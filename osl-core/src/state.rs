//! # StateVector — Estado de 6 Camadas
//!
//! Representa o estado simbólico-jurídico como seis escalares nomeados.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              OSL STATE (6 × f64)             │
//! ├──────────────────────────────────────────────┤
//! │   L     P     A     R     V     ε            │
//! │  LEG   PRI   AUT   REC   VIS   ENT           │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Valores vivem em [0,1]. Aritmética intermediária (`distort`, `redirect`)
//! pode sair do intervalo e é clampada antes de ser armazenada.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Número fixo de camadas do estado
pub const NUM_LAYERS: usize = 6;

/// Identifica uma camada do estado
///
/// A ordem de declaração é a ordem canônica usada em projeções
/// e na serialização do estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// L — legalidade formal
    Legality,
    /// P — privacidade
    Privacy,
    /// A — autonomia
    Autonomy,
    /// R — reciprocidade
    Reciprocity,
    /// V — visibilidade
    Visibility,
    /// ε — entropia semântica
    Entropy,
}

impl Layer {
    /// Todas as camadas, em ordem canônica
    pub const ALL: [Layer; NUM_LAYERS] = [
        Layer::Legality,
        Layer::Privacy,
        Layer::Autonomy,
        Layer::Reciprocity,
        Layer::Visibility,
        Layer::Entropy,
    ];

    /// Símbolo de uma letra (ε para entropia)
    pub const fn symbol(self) -> &'static str {
        match self {
            Layer::Legality => "L",
            Layer::Privacy => "P",
            Layer::Autonomy => "A",
            Layer::Reciprocity => "R",
            Layer::Visibility => "V",
            Layer::Entropy => "ε",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Estado completo OSL: 6 camadas nomeadas
///
/// # Princípio
///
/// > *"Estado é sagrado — nunca modifique in-place, sempre crie novo."*
///
/// # Exemplo
///
/// ```
/// use osl_core::state::{StateVector, Layer};
///
/// let state = StateVector::baseline();
/// assert_eq!(state.get(Layer::Entropy), 0.2);
///
/// let next = state.with_layer(Layer::Legality, 0.9);
/// assert_eq!(next.get(Layer::Legality), 0.9);
/// assert_eq!(state.get(Layer::Legality), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    /// L — legalidade formal
    pub legality: f64,
    /// P — privacidade
    pub privacy: f64,
    /// A — autonomia
    pub autonomy: f64,
    /// R — reciprocidade
    pub reciprocity: f64,
    /// V — visibilidade
    pub visibility: f64,
    /// ε — entropia semântica
    pub entropy: f64,
}

impl StateVector {
    /// Estado vácuo: todas as camadas em 0.0
    pub const fn vacuum() -> Self {
        Self::uniform(0.0)
    }

    /// Estado assentado: todas as camadas em 1.0 (decoerência zero)
    pub const fn settled() -> Self {
        Self::uniform(1.0)
    }

    /// Todas as camadas com o mesmo valor
    pub const fn uniform(value: f64) -> Self {
        Self {
            legality: value,
            privacy: value,
            autonomy: value,
            reciprocity: value,
            visibility: value,
            entropy: value,
        }
    }

    /// Estado de referência: camadas em 0.5, entropia em 0.2
    pub const fn baseline() -> Self {
        Self {
            legality: 0.5,
            privacy: 0.5,
            autonomy: 0.5,
            reciprocity: 0.5,
            visibility: 0.5,
            entropy: 0.2,
        }
    }

    /// Acessa camada
    #[inline]
    pub const fn get(&self, layer: Layer) -> f64 {
        match layer {
            Layer::Legality => self.legality,
            Layer::Privacy => self.privacy,
            Layer::Autonomy => self.autonomy,
            Layer::Reciprocity => self.reciprocity,
            Layer::Visibility => self.visibility,
            Layer::Entropy => self.entropy,
        }
    }

    /// Retorna novo estado com camada modificada (imutável)
    #[inline]
    pub const fn with_layer(&self, layer: Layer, value: f64) -> Self {
        let mut new = *self;
        match layer {
            Layer::Legality => new.legality = value,
            Layer::Privacy => new.privacy = value,
            Layer::Autonomy => new.autonomy = value,
            Layer::Reciprocity => new.reciprocity = value,
            Layer::Visibility => new.visibility = value,
            Layer::Entropy => new.entropy = value,
        }
        new
    }

    /// Modifica camada no lugar (mutável)
    #[inline]
    pub const fn set_layer(&mut self, layer: Layer, value: f64) {
        *self = self.with_layer(layer, value);
    }

    /// Soma de todas as camadas
    pub fn sum(&self) -> f64 {
        Layer::ALL.iter().map(|&l| self.get(l)).sum()
    }

    /// Camadas como array na ordem canônica
    pub fn to_array(&self) -> [f64; NUM_LAYERS] {
        let mut out = [0.0; NUM_LAYERS];
        for (i, &layer) in Layer::ALL.iter().enumerate() {
            out[i] = self.get(layer);
        }
        out
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::baseline()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for &layer in &Layer::ALL {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={:.3}", layer.symbol(), self.get(layer))?;
            first = false;
        }
        Ok(())
    }
}

/// Clamp convencional de camada: [0,1]
#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline() {
        let state = StateVector::baseline();
        assert_eq!(state.get(Layer::Legality), 0.5);
        assert_eq!(state.get(Layer::Entropy), 0.2);
    }

    #[test]
    fn test_with_layer_immutable() {
        let state = StateVector::vacuum();
        let next = state.with_layer(Layer::Visibility, 0.7);

        assert_eq!(state.get(Layer::Visibility), 0.0);
        assert_eq!(next.get(Layer::Visibility), 0.7);
    }

    #[test]
    fn test_sum() {
        let state = StateVector::uniform(0.25);
        assert!((state.sum() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_to_array_order() {
        let state = StateVector::baseline().with_layer(Layer::Entropy, 0.9);
        let arr = state.to_array();
        assert_eq!(arr[0], 0.5); // L
        assert_eq!(arr[5], 0.9); // ε
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.3), 0.0);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(0.42), 0.42);
    }
}
