//! # Matriz de Override
//!
//! Relações direcionais de supressão entre operadores: se `from` aparece
//! antes de `to` na sequência, o efeito de `to` é anulado naquele passo.
//! A relação é de um salto — nunca transitiva.

use crate::error::{CatalogError, CatalogResult};
use crate::operator::{OperatorId, OperatorRegistry};
use serde::{Deserialize, Serialize};

/// Regra direcional de supressão
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    /// Operador que suprime
    pub from: OperatorId,
    /// Operador suprimido
    pub to: OperatorId,
    /// Descrição do efeito, para exibição
    pub description: String,
}

impl OverrideRule {
    pub fn new(
        from: impl Into<OperatorId>,
        to: impl Into<OperatorId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            description: description.into(),
        }
    }
}

/// Matriz imutável de regras de override
#[derive(Debug, Clone, Default)]
pub struct OverrideMatrix {
    rules: Vec<OverrideRule>,
}

impl OverrideMatrix {
    /// Constrói a matriz, rejeitando auto-referência
    ///
    /// A checagem contra o registro (ids existentes) fica em
    /// [`OverrideMatrix::validate`], chamada uma única vez na
    /// construção do motor.
    pub fn new(rules: Vec<OverrideRule>) -> CatalogResult<Self> {
        for rule in &rules {
            if rule.from == rule.to {
                return Err(CatalogError::SelfOverride(rule.from.to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// Matriz de referência para o catálogo O1–O8
    pub fn reference() -> Self {
        let rules = vec![
            OverrideRule::new("O4", "O2", "Counterveil dissolve o Veil antes de assentar"),
            OverrideRule::new("O6", "O3", "Null Writ revoga a refração de reciprocidade"),
            OverrideRule::new("O6", "O5", "Null Writ quebra o trancamento de eco"),
            OverrideRule::new("O7", "O1", "Mirror Clause reflete a invocação de égide"),
        ];
        Self::new(rules).expect("reference override matrix is valid")
    }

    /// Valida ids contra o registro — uma vez, na carga
    pub fn validate(&self, registry: &OperatorRegistry) -> CatalogResult<()> {
        for rule in &self.rules {
            if !registry.contains(&rule.from) {
                return Err(CatalogError::UnknownOverrideSource(rule.from.to_string()));
            }
            if !registry.contains(&rule.to) {
                return Err(CatalogError::UnknownOverrideTarget(rule.to.to_string()));
            }
        }
        Ok(())
    }

    /// Existe regra `from -> to`?
    pub fn overrides(&self, from: &OperatorId, to: &OperatorId) -> bool {
        self.rules.iter().any(|r| &r.from == from && &r.to == to)
    }

    /// Regras que suprimem `target`
    pub fn overriders_of<'a>(
        &'a self,
        target: &'a OperatorId,
    ) -> impl Iterator<Item = &'a OverrideRule> {
        self.rules.iter().filter(move |r| &r.to == target)
    }

    /// Todas as regras
    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }
}
