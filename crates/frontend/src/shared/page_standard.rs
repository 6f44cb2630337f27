//! Categorías de página.
//!
//! Cada pantalla declara un `id` `{entidad}--{categoría}` (p. ej. `a201--list`)
//! y `data-page-category` con una de estas constantes.

/// Lista con búsqueda y modal de edición
pub const PAGE_CAT_LIST: &str = "list";

/// Página libre: login, avisos
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub fn page_id(entity_index: &str, category: &str) -> String {
    format!("{entity_index}--{category}")
}

/// `true` si el id tiene la forma `{entidad}--{categoría}`
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("a201", PAGE_CAT_LIST), "a201--list");
        assert!(is_valid_page_id("a201--list"));
        assert!(!is_valid_page_id("a201"));
        assert!(!is_valid_page_id("--list"));
    }
}
