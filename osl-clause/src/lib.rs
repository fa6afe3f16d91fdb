//! # 🜃 osl-clause — Variante Pareada (Cláusulas)
//!
//! Instanciação alternativa do OSL: os elementos do catálogo são
//! cláusulas com tags de tipologia, e as relações são pareadas — um
//! grafo direcional de override/modificação entre todos os elementos da
//! sequência, não uma execução puramente sequencial.
//!
//! ## Responsabilidades
//! - Resolver a sequência contra o registro (falha rápida)
//! - Consultar a tabela curada por fingerprint exato
//! - Cair para a regra genérica pareada sem acerto curado
//! - Projetar o conjunto sobre tipologias (normalizada pelo máximo)
//! - Detectar padrões estruturais nomeados
//!
//! ## Uso
//!
//! ```
//! use osl_clause::ClauseEngine;
//!
//! let engine = ClauseEngine::reference();
//! let analysis = engine.analyze(&["C1".into(), "C2".into(), "C4".into()]).unwrap();
//!
//! // Sequência canônica: grafo e narrativa curados
//! assert!(analysis.narrative.is_some());
//! ```

pub mod curated;
pub mod error;
pub mod graph;
pub mod patterns;

pub use curated::{CuratedEntry, fingerprint};
pub use error::{ClauseError, ClauseResult};
pub use graph::{EdgeKind, GraphEdge, GraphNode, OverrideGraph, build_generic};
pub use patterns::PatternFlag;

use osl_core::clause::{Clause, ClauseId, ClauseRegistry};
use osl_core::export;
use osl_core::Typology;
use osl_risk::{RiskVector, project_clauses};
use serde::{Deserialize, Serialize};

/// Resultado completo da análise de uma sequência de cláusulas
///
/// Valor fresco por análise, nunca mutado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    /// Eco da sequência de entrada
    pub sequence: Vec<ClauseId>,
    /// Cláusulas selecionadas, na ordem da sequência
    pub clause_vector: Vec<Clause>,
    /// Projeção sobre tipologias (normalizada pelo máximo)
    pub risk_typology: RiskVector,
    /// Tipologia dominante
    pub dominant_typology: Typology,
    /// Grafo direcional de override/modificação
    pub override_graph: OverrideGraph,
    /// Padrões estruturais disparados
    pub pattern_flags: Vec<PatternFlag>,
    /// Narrativa curada, quando a sequência é canônica
    pub narrative: Option<String>,
}

impl ClauseAnalysis {
    /// Serializa como JSON UTF-8 pretty-printed
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        export::to_json_pretty(self)
    }

    /// Nome de arquivo padrão de exportação
    pub fn export_filename(&self) -> String {
        let parts: Vec<Option<String>> = self
            .sequence
            .iter()
            .map(|id| Some(id.to_string()))
            .collect();
        export::default_filename(&parts)
    }
}

/// Motor da variante de cláusulas
///
/// Carrega um registro imutável injetado na construção; instâncias
/// distintas podem carregar catálogos distintos.
#[derive(Debug, Clone)]
pub struct ClauseEngine {
    registry: ClauseRegistry,
}

impl ClauseEngine {
    /// Cria o motor com um registro já validado
    pub fn new(registry: ClauseRegistry) -> Self {
        Self { registry }
    }

    /// Motor com o catálogo de referência
    pub fn reference() -> Self {
        Self::new(ClauseRegistry::reference())
    }

    /// Registro de cláusulas
    pub fn registry(&self) -> &ClauseRegistry {
        &self.registry
    }

    /// Analisa uma sequência de cláusulas
    ///
    /// Sequência vazia é resultado zero válido, não erro. Referência
    /// desconhecida falha rápido, sem resultado parcial.
    pub fn analyze(&self, sequence: &[ClauseId]) -> ClauseResult<ClauseAnalysis> {
        let mut clauses: Vec<&Clause> = Vec::with_capacity(sequence.len());
        for id in sequence {
            let clause = self
                .registry
                .get(id)
                .ok_or_else(|| ClauseError::UnknownReference(id.to_string()))?;
            clauses.push(clause);
        }

        // Caminho curado primeiro; sem acerto exato, regra genérica
        let (override_graph, narrative) = match curated::lookup(sequence) {
            Some(entry) => {
                let graph = OverrideGraph {
                    nodes: graph::nodes_for(&clauses),
                    edges: entry.edges.clone(),
                };
                (graph, Some(entry.narrative.to_string()))
            }
            None => (build_generic(&clauses), None),
        };

        let risk_typology = project_clauses(clauses.iter().copied());
        let pattern_flags = patterns::detect(&clauses, &override_graph);

        Ok(ClauseAnalysis {
            sequence: sequence.to_vec(),
            clause_vector: clauses.into_iter().cloned().collect(),
            dominant_typology: risk_typology.dominant(),
            risk_typology,
            override_graph,
            pattern_flags,
            narrative,
        })
    }
}
