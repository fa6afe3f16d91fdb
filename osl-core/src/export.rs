//! # Exportação JSON
//!
//! Serialização de resultados como JSON UTF-8 pretty-printed, mais a
//! geração do nome de arquivo padrão: nome do produto + rendição da
//! sequência de entrada unida por hífens.

use serde::Serialize;

/// Nome do produto, usado como prefixo de arquivos exportados
pub const PRODUCT: &str = "osl";

/// Marcador de slot vazio na rendição do nome de arquivo
const EMPTY_SLOT: &str = "_";

/// Serializa como JSON pretty-printed
pub fn to_json_pretty<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Nome de arquivo padrão para uma sequência de identificadores
///
/// Slots vazios (`None`) viram `_`, preservando a posição.
///
/// ```
/// use osl_core::export::default_filename;
///
/// let parts = vec![Some("O1".to_string()), None, Some("O4".to_string())];
/// assert_eq!(default_filename(&parts), "osl-O1-_-O4.json");
/// ```
pub fn default_filename(parts: &[Option<String>]) -> String {
    let joined: Vec<&str> = parts
        .iter()
        .map(|p| p.as_deref().unwrap_or(EMPTY_SLOT))
        .collect();
    format!("{}-{}.json", PRODUCT, joined.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filename() {
        let parts = vec![
            Some("O1".to_string()),
            Some("O2".to_string()),
            Some("O3".to_string()),
        ];
        assert_eq!(default_filename(&parts), "osl-O1-O2-O3.json");
    }

    #[test]
    fn test_default_filename_with_empty_slots() {
        let parts = vec![None, Some("C2".to_string())];
        assert_eq!(default_filename(&parts), "osl-_-C2.json");
    }
}
