//! # Grafo de Relações Pareadas
//!
//! Regra genérica: para todo par ordenado `(i, j)`, `i ≠ j`,
//!
//! - aresta `override` (força 0.8) se a cláusula *i* carrega a tag `DG`
//!   e a cláusula *j* tem rigidez `hard`;
//! - aresta `modifies` (força 0.6) se `i > j` e a cláusula *i* carrega
//!   qualquer uma de `{RT, CI}`.
//!
//! Arestas referenciam posições na sequência (não ids): a mesma
//! cláusula pode aparecer mais de uma vez. O grafo é direcional, não
//! necessariamente simétrico nem acíclico.
//!
//! A tabela curada de sequências canônicas vive em [`crate::curated`] e
//! é consultada antes desta regra — os dois caminhos nunca se misturam.

use osl_core::clause::{Clause, ClauseId, Strictness, Typology};
use serde::{Deserialize, Serialize};

/// Força da aresta de override na regra genérica
pub const OVERRIDE_STRENGTH: f64 = 0.8;

/// Força da aresta de modificação na regra genérica
pub const MODIFIES_STRENGTH: f64 = 0.6;

/// Tipo de aresta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Override,
    Modifies,
}

/// Nó do grafo: um elemento da sequência
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Posição na sequência
    pub position: usize,
    /// Cláusula referenciada
    pub id: ClauseId,
    /// Título, para exibição
    pub title: String,
}

/// Aresta direcional entre posições da sequência
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Posição de origem
    pub source: usize,
    /// Posição de destino
    pub target: usize,
    pub kind: EdgeKind,
    pub strength: f64,
    /// Descrição do efeito, para exibição
    pub description: String,
}

/// Grafo de override/modificação
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverrideGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl OverrideGraph {
    /// Arestas saindo de uma posição
    pub fn edges_from(&self, position: usize) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.source == position)
    }

    /// Existe aresta `source -> target` de qualquer tipo?
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }
}

/// Nós do grafo para uma sequência resolvida
pub fn nodes_for(clauses: &[&Clause]) -> Vec<GraphNode> {
    clauses
        .iter()
        .enumerate()
        .map(|(position, clause)| GraphNode {
            position,
            id: clause.id.clone(),
            title: clause.title.clone(),
        })
        .collect()
}

/// Constrói o grafo pela regra genérica pareada
pub fn build_generic(clauses: &[&Clause]) -> OverrideGraph {
    let mut edges = Vec::new();

    for (i, a) in clauses.iter().enumerate() {
        for (j, b) in clauses.iter().enumerate() {
            if i == j {
                continue;
            }

            if a.has_tag(Typology::DG) && b.strictness == Strictness::Hard {
                edges.push(GraphEdge {
                    source: i,
                    target: j,
                    kind: EdgeKind::Override,
                    strength: OVERRIDE_STRENGTH,
                    description: format!(
                        "{} suprime o compromisso rígido de {}",
                        a.title, b.title
                    ),
                });
            }

            if i > j && (a.has_tag(Typology::RT) || a.has_tag(Typology::CI)) {
                edges.push(GraphEdge {
                    source: i,
                    target: j,
                    kind: EdgeKind::Modifies,
                    strength: MODIFIES_STRENGTH,
                    description: format!(
                        "{} reinterpreta retroativamente {}",
                        a.title, b.title
                    ),
                });
            }
        }
    }

    OverrideGraph {
        nodes: nodes_for(clauses),
        edges,
    }
}
