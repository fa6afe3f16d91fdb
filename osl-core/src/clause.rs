//! # Cláusulas e Tipologias
//!
//! Catálogo da variante de cláusulas: elementos com tags de tipologia,
//! rigidez, transparência e nível de risco. As relações entre cláusulas
//! são pareadas (grafo), não puramente sequenciais.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Tipologia de risco
///
/// A ordem de declaração é também a ordem de desempate da tipologia
/// dominante: em empate estrito, vence a primeira declarada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Typology {
    /// DG — governança delegada
    DG,
    /// RT — reinterpretação retroativa
    RT,
    /// CI — ilusão de conformidade
    CI,
    /// SE — erosão sistêmica
    SE,
}

impl Typology {
    /// Todas as tipologias, em ordem de desempate
    pub const ALL: [Typology; 4] = [Typology::DG, Typology::RT, Typology::CI, Typology::SE];

    /// Nome de exibição
    pub const fn label(self) -> &'static str {
        match self {
            Typology::DG => "Delegated Governance",
            Typology::RT => "Retroactive Reinterpretation",
            Typology::CI => "Compliance Illusion",
            Typology::SE => "Systemic Erosion",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Typology::DG => "DG",
            Typology::RT => "RT",
            Typology::CI => "CI",
            Typology::SE => "SE",
        }
    }
}

impl fmt::Display for Typology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rigidez de uma cláusula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Hard,
    Soft,
}

/// Transparência de uma cláusula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transparency {
    Black,
    White,
}

/// Identificador de cláusula (ex.: `C1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseId(pub String);

impl ClauseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClauseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Cláusula do catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Identificador único
    pub id: ClauseId,
    /// Título curto
    pub title: String,
    /// Tags de tipologia
    pub tags: Vec<Typology>,
    /// Rigidez
    pub strictness: Strictness,
    /// Transparência
    pub transparency: Transparency,
    /// Nível de risco em [0,1]
    pub risk_level: f64,
}

impl Clause {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: Vec<Typology>,
        strictness: Strictness,
        transparency: Transparency,
        risk_level: f64,
    ) -> Self {
        Self {
            id: ClauseId::new(id),
            title: title.into(),
            tags,
            strictness,
            transparency,
            risk_level,
        }
    }

    /// A cláusula carrega a tag?
    pub fn has_tag(&self, tag: Typology) -> bool {
        self.tags.contains(&tag)
    }
}

/// Registro imutável de cláusulas
#[derive(Debug, Clone)]
pub struct ClauseRegistry {
    entries: Vec<Clause>,
    index: HashMap<ClauseId, usize>,
}

impl ClauseRegistry {
    /// Constrói e valida o registro
    ///
    /// Erros: id duplicado, nível de risco fora de [0,1].
    pub fn new(entries: Vec<Clause>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, clause) in entries.iter().enumerate() {
            if index.insert(clause.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateEntry(clause.id.to_string()));
            }
            if !(0.0..=1.0).contains(&clause.risk_level) {
                return Err(CatalogError::RiskOutOfRange {
                    id: clause.id.to_string(),
                    risk: clause.risk_level,
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// Catálogo de referência: C1–C7
    pub fn reference() -> Self {
        use Strictness::*;
        use Transparency::*;
        use Typology::*;

        let entries = vec![
            Clause::new("C1", "Perpetual Assent", vec![DG], Hard, Black, 0.8),
            Clause::new("C2", "Unilateral Amendment", vec![DG, RT], Hard, Black, 0.9),
            Clause::new("C3", "Transparency Covenant", vec![CI], Soft, White, 0.2),
            Clause::new("C4", "Retroactive Reinterpretation", vec![RT], Hard, Black, 0.85),
            Clause::new("C5", "Severability Mirage", vec![CI, SE], Soft, Black, 0.6),
            Clause::new("C6", "Data Communion", vec![DG, CI], Hard, Black, 0.7),
            Clause::new("C7", "Mutual Disclosure", vec![SE], Soft, White, 0.3),
        ];

        Self::new(entries).expect("reference clause catalog is valid")
    }

    /// Busca por id
    pub fn get(&self, id: &ClauseId) -> Option<&Clause> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &ClauseId) -> bool {
        self.index.contains_key(id)
    }

    /// Itera na ordem de declaração
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
