//! # Tabela Curada de Sequências Canônicas
//!
//! Algumas entradas merecem explicação curada, de qualidade humana.
//! Sequências canônicas de três cláusulas são casadas por fingerprint
//! exato (ids unidos por hífen) e recebem grafo e narrativa curados,
//! contornando intencionalmente a regra genérica de [`crate::graph`].
//!
//! Consulta sempre antes da regra genérica; sem acerto exato, cai para
//! a regra genérica. Os dois caminhos nunca se entrelaçam.

use crate::graph::{EdgeKind, GraphEdge};
use once_cell::sync::Lazy;
use osl_core::clause::ClauseId;
use std::collections::HashMap;

/// Entrada curada: arestas e narrativa para uma sequência canônica
#[derive(Debug, Clone)]
pub struct CuratedEntry {
    /// Fingerprint da sequência (ids unidos por hífen)
    pub fingerprint: &'static str,
    /// Arestas curadas (posições na sequência)
    pub edges: Vec<GraphEdge>,
    /// Narrativa curada
    pub narrative: &'static str,
}

fn edge(
    source: usize,
    target: usize,
    kind: EdgeKind,
    strength: f64,
    description: &str,
) -> GraphEdge {
    GraphEdge {
        source,
        target,
        kind,
        strength,
        description: description.to_string(),
    }
}

/// Tabela curada, construída uma vez
static CURATED: Lazy<HashMap<&'static str, CuratedEntry>> = Lazy::new(|| {
    let entries = vec![
        CuratedEntry {
            fingerprint: "C1-C2-C4",
            edges: vec![
                edge(
                    1,
                    0,
                    EdgeKind::Override,
                    0.9,
                    "Unilateral Amendment esvazia Perpetual Assent: o consentimento passa a renovar-se sozinho",
                ),
                edge(
                    2,
                    1,
                    EdgeKind::Modifies,
                    0.7,
                    "Retroactive Reinterpretation reescreve o alcance de cada emenda já publicada",
                ),
                edge(
                    2,
                    0,
                    EdgeKind::Override,
                    0.85,
                    "Retroactive Reinterpretation devolve ao assentimento original um sentido que ele nunca teve",
                ),
            ],
            narrative: "O trio Perpetual Assent → Unilateral Amendment → Retroactive \
                Reinterpretation fecha um circuito de consentimento sem sujeito: o assentimento \
                é dado uma vez, emendado unilateralmente e, por fim, reinterpretado para \
                sempre ter significado o que convém agora. Nenhuma cláusula isolada é \
                inválida; a sequência, lida em ordem, dissolve o próprio ato de consentir.",
        },
        CuratedEntry {
            fingerprint: "C6-C5-C3",
            edges: vec![
                edge(
                    0,
                    2,
                    EdgeKind::Override,
                    0.8,
                    "Data Communion esvazia o Transparency Covenant: o que é de todos não precisa ser mostrado a ninguém",
                ),
                edge(
                    1,
                    2,
                    EdgeKind::Modifies,
                    0.65,
                    "Severability Mirage isola a promessa de transparência do resto do contrato",
                ),
            ],
            narrative: "Data Communion → Severability Mirage → Transparency Covenant encena a \
                transparência como rito final: os dados já foram comungados, a severabilidade \
                já blindou o essencial, e o pacto de transparência chega tarde, aplicando-se \
                apenas ao que sobrou. A aparência de abertura é o produto, não o efeito.",
        },
    ];

    entries.into_iter().map(|e| (e.fingerprint, e)).collect()
});

/// Fingerprint de uma sequência: ids unidos por hífen
pub fn fingerprint(ids: &[ClauseId]) -> String {
    ids.iter()
        .map(ClauseId::as_str)
        .collect::<Vec<_>>()
        .join("-")
}

/// Consulta a tabela curada por casamento exato de fingerprint
pub fn lookup(ids: &[ClauseId]) -> Option<&'static CuratedEntry> {
    CURATED.get(fingerprint(ids).as_str())
}
