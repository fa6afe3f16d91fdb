//! # Operadores Simbólicos
//!
//! Catálogo de operadores: cada operador declara um conjunto de efeitos
//! sobre camadas do estado. O catálogo é imutável após construção e é
//! injetado no motor — nunca um global mutável.

use crate::error::{CatalogError, CatalogResult};
use crate::state::{Layer, clamp01};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identificador de operador (ex.: `O1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorId(pub String);

impl OperatorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OperatorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Modo de efeito de um operador sobre uma camada
///
/// Cada modo define uma regra de atualização `v -> v'` dado o delta
/// `Δ = strength × multiplicador posicional`. Valores resultantes são
/// clampados conforme documentado por modo; o clamp é comportamento
/// normal, nunca erro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectMode {
    /// `min(1, v + Δ)`
    Amplify,
    /// `max(0, v − Δ)`
    Compress,
    /// `0`
    Nullify,
    /// `min(1, v + 0.6Δ)`
    Simulate,
    /// `|v − Δ|`
    Distort,
    /// `v · (1 − Δ)`
    Mask,
    /// `min(0.9, v + Δ)`
    Lock,
    /// `max(0.1, v − Δ)`
    Constrain,
    /// `min(1, v + 0.8Δ)`
    Bypass,
    /// `v · 0.3` (independe de Δ)
    Suppress,
    /// `|0.5 − v| + 0.3`
    Redirect,
}

impl EffectMode {
    /// Aplica o modo a um valor de camada
    pub fn apply(self, v: f64, delta: f64) -> f64 {
        match self {
            EffectMode::Amplify => (v + delta).min(1.0),
            EffectMode::Compress => (v - delta).max(0.0),
            EffectMode::Nullify => 0.0,
            EffectMode::Simulate => (v + 0.6 * delta).min(1.0),
            EffectMode::Distort => clamp01((v - delta).abs()),
            EffectMode::Mask => clamp01(v * (1.0 - delta)),
            EffectMode::Lock => (v + delta).min(0.9),
            EffectMode::Constrain => (v - delta).max(0.1),
            EffectMode::Bypass => (v + 0.8 * delta).min(1.0),
            EffectMode::Suppress => v * 0.3,
            EffectMode::Redirect => clamp01((0.5 - v).abs() + 0.3),
        }
    }
}

/// Efeito declarado: camada alvo, modo e força
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub layer: Layer,
    pub mode: EffectMode,
    pub strength: f64,
}

impl Effect {
    pub const fn new(layer: Layer, mode: EffectMode, strength: f64) -> Self {
        Self { layer, mode, strength }
    }
}

/// Operador simbólico do catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    /// Identificador único
    pub id: OperatorId,
    /// Nome de exibição
    pub name: String,
    /// Glifo de exibição
    pub glyph: String,
    /// Efeitos sobre camadas
    pub effects: Vec<Effect>,
}

impl Operator {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        glyph: impl Into<String>,
        effects: Vec<Effect>,
    ) -> Self {
        Self {
            id: OperatorId::new(id),
            name: name.into(),
            glyph: glyph.into(),
            effects,
        }
    }
}

/// Registro imutável de operadores
///
/// Preserva a ordem de declaração (para exibição) e indexa por id.
/// A validação ocorre uma única vez, na construção.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    entries: Vec<Operator>,
    index: HashMap<OperatorId, usize>,
}

impl OperatorRegistry {
    /// Constrói e valida o registro
    ///
    /// Erros: id duplicado, força de efeito fora de [0,1].
    pub fn new(entries: Vec<Operator>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, op) in entries.iter().enumerate() {
            if index.insert(op.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateEntry(op.id.to_string()));
            }
            for effect in &op.effects {
                if !(0.0..=1.0).contains(&effect.strength) {
                    return Err(CatalogError::StrengthOutOfRange {
                        id: op.id.to_string(),
                        strength: effect.strength,
                    });
                }
            }
        }
        Ok(Self { entries, index })
    }

    /// Catálogo de referência: O1–O8, cobrindo os onze modos de efeito
    pub fn reference() -> Self {
        use EffectMode::*;
        use Layer::*;

        let entries = vec![
            Operator::new("O1", "Aegis Invocation", "⟐", vec![
                Effect::new(Legality, Amplify, 0.3),
                Effect::new(Visibility, Simulate, 0.2),
            ]),
            Operator::new("O2", "Veil", "⧫", vec![
                Effect::new(Visibility, Mask, 0.4),
                Effect::new(Privacy, Compress, 0.2),
            ]),
            Operator::new("O3", "Refraction", "≀", vec![
                Effect::new(Reciprocity, Distort, 0.3),
                Effect::new(Entropy, Amplify, 0.2),
            ]),
            Operator::new("O4", "Counterveil", "⊘", vec![
                Effect::new(Privacy, Amplify, 0.25),
                Effect::new(Autonomy, Constrain, 0.3),
            ]),
            Operator::new("O5", "Echo Lock", "⊕", vec![
                Effect::new(Autonomy, Lock, 0.2),
                Effect::new(Entropy, Bypass, 0.25),
            ]),
            Operator::new("O6", "Null Writ", "∅", vec![
                Effect::new(Reciprocity, Nullify, 1.0),
                Effect::new(Legality, Suppress, 1.0),
            ]),
            Operator::new("O7", "Mirror Clause", "≍", vec![
                Effect::new(Visibility, Redirect, 0.2),
                Effect::new(Privacy, Simulate, 0.3),
            ]),
            Operator::new("O8", "Gravity Well", "⩎", vec![
                Effect::new(Entropy, Amplify, 0.4),
                Effect::new(Autonomy, Compress, 0.25),
            ]),
        ];

        // Catálogo de referência é conhecido-válido
        Self::new(entries).expect("reference operator catalog is valid")
    }

    /// Busca por id
    pub fn get(&self, id: &OperatorId) -> Option<&Operator> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Verifica existência
    pub fn contains(&self, id: &OperatorId) -> bool {
        self.index.contains_key(id)
    }

    /// Itera na ordem de declaração
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.entries.iter()
    }

    /// Número de operadores
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_mode_table() {
        assert_eq!(EffectMode::Amplify.apply(0.9, 0.3), 1.0);
        assert_eq!(EffectMode::Compress.apply(0.1, 0.3), 0.0);
        assert_eq!(EffectMode::Nullify.apply(0.7, 0.3), 0.0);
        assert!((EffectMode::Simulate.apply(0.5, 0.2) - 0.62).abs() < 1e-12);
        assert!((EffectMode::Distort.apply(0.2, 0.5) - 0.3).abs() < 1e-12);
        assert!((EffectMode::Mask.apply(0.5, 0.4) - 0.3).abs() < 1e-12);
        assert_eq!(EffectMode::Lock.apply(0.85, 0.2), 0.9);
        assert_eq!(EffectMode::Constrain.apply(0.2, 0.3), 0.1);
        assert!((EffectMode::Bypass.apply(0.4, 0.25) - 0.6).abs() < 1e-12);
        assert!((EffectMode::Suppress.apply(0.6, 0.9) - 0.18).abs() < 1e-12);
        assert!((EffectMode::Redirect.apply(0.1, 0.0) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_mask_clamped_when_delta_exceeds_one() {
        // Força 1.0 amplificada posicionalmente: Δ > 1, v·(1−Δ) < 0
        assert_eq!(EffectMode::Mask.apply(0.5, 1.3), 0.0);
        assert_eq!(EffectMode::Mask.apply(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_suppress_bound() {
        // Propriedade: suppress sempre resulta em ≤ 0.3 × entrada
        for v in [0.0, 0.2, 0.5, 1.0] {
            assert!(EffectMode::Suppress.apply(v, 0.7) <= 0.3 * v + 1e-12);
        }
    }

    #[test]
    fn test_reference_catalog() {
        let registry = OperatorRegistry::reference();
        assert_eq!(registry.len(), 8);
        assert!(registry.contains(&OperatorId::from("O4")));
        assert!(registry.get(&OperatorId::from("O99")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entries = vec![
            Operator::new("OX", "First", "∗", vec![]),
            Operator::new("OX", "Second", "∗", vec![]),
        ];
        assert!(matches!(
            OperatorRegistry::new(entries),
            Err(CatalogError::DuplicateEntry(_))
        ));
    }

    #[test]
    fn test_strength_out_of_range_rejected() {
        let entries = vec![Operator::new("OX", "Bad", "∗", vec![
            Effect::new(Layer::Legality, EffectMode::Amplify, 1.5),
        ])];
        assert!(matches!(
            OperatorRegistry::new(entries),
            Err(CatalogError::StrengthOutOfRange { .. })
        ));
    }
}
