//! # Padrões Estruturais
//!
//! Detecção de padrões nomeados sobre o conjunto de cláusulas e seu
//! grafo. Cada padrão é um predicado puro; os nomes disparados entram
//! no resultado como `pattern_flags`.

use crate::graph::{EdgeKind, OverrideGraph};
use osl_core::clause::{Clause, Strictness, Transparency};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Padrão estrutural nomeado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternFlag {
    /// Alguma posição suprime duas ou mais cláusulas
    CascadeOverride,
    /// Maioria das cláusulas é opaca (black)
    OpacityDominant,
    /// Todas as cláusulas são rígidas (hard)
    HardLock,
    /// Par de posições com arestas nos dois sentidos
    ReciprocalModification,
}

impl PatternFlag {
    pub const fn name(self) -> &'static str {
        match self {
            PatternFlag::CascadeOverride => "cascade-override",
            PatternFlag::OpacityDominant => "opacity-dominant",
            PatternFlag::HardLock => "hard-lock",
            PatternFlag::ReciprocalModification => "reciprocal-modification",
        }
    }
}

impl fmt::Display for PatternFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detecta os padrões disparados por um conjunto de cláusulas e grafo
pub fn detect(clauses: &[&Clause], graph: &OverrideGraph) -> Vec<PatternFlag> {
    let mut flags = Vec::new();

    if clauses.is_empty() {
        return flags;
    }

    let cascade = (0..clauses.len()).any(|position| {
        graph
            .edges_from(position)
            .filter(|e| e.kind == EdgeKind::Override)
            .count()
            >= 2
    });
    if cascade {
        flags.push(PatternFlag::CascadeOverride);
    }

    let black = clauses
        .iter()
        .filter(|c| c.transparency == Transparency::Black)
        .count();
    if black * 2 > clauses.len() {
        flags.push(PatternFlag::OpacityDominant);
    }

    if clauses.iter().all(|c| c.strictness == Strictness::Hard) {
        flags.push(PatternFlag::HardLock);
    }

    let reciprocal = graph
        .edges
        .iter()
        .any(|e| graph.has_edge(e.target, e.source));
    if reciprocal {
        flags.push(PatternFlag::ReciprocalModification);
    }

    flags
}
