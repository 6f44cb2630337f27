//! Client-side search over in-memory lists

use serde::Serialize;
use serde_json::{Map, Value};

use crate::shared::metadata::value_text;

/// Registros que admiten búsqueda en la lista
///
/// Los campos se leen de la representación serde del registro, por eso
/// `SEARCH_FIELDS` usa los nombres camelCase del wire.
pub trait Searchable: Serialize {
    const SEARCH_FIELDS: &'static [&'static str];

    /// Valor de un campo como texto, `None` si no existe o es nulo
    fn get_field_value(&self, field: &str) -> Option<String> {
        match serde_json::to_value(self).ok()? {
            Value::Object(map) => text_of(&map, field),
            _ => None,
        }
    }

    /// Coincidencia parcial sin distinguir mayúsculas en cualquier campo configurado
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let Ok(Value::Object(map)) = serde_json::to_value(self) else {
            return false;
        };
        Self::SEARCH_FIELDS.iter().any(|field| {
            text_of(&map, field)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }
}

fn text_of(map: &Map<String, Value>, field: &str) -> Option<String> {
    match map.get(field)? {
        Value::Null => None,
        value => Some(value_text(value)),
    }
}

/// Filtra la lista; un término vacío la devuelve completa
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        id: i64,
        nombre: String,
        codigo: Option<String>,
        notas: String,
    }

    impl Searchable for Row {
        const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "codigo", "id"];
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                nombre: "Bodega Central".into(),
                codigo: Some("BC-01".into()),
                notas: "quito".into(),
            },
            Row {
                id: 22,
                nombre: "Sucursal Norte".into(),
                codigo: None,
                notas: "central".into(),
            },
        ]
    }

    #[test]
    fn test_empty_filter_returns_all() {
        assert_eq!(filter_list(&rows(), ""), rows());
        assert_eq!(filter_list(&rows(), "   "), rows());
    }

    #[test]
    fn test_filter_is_case_insensitive_subset() {
        let found = filter_list(&rows(), "CENTRAL");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
        // notas no es campo de búsqueda
        assert!(filter_list(&rows(), "quito").is_empty());
        assert_eq!(filter_list(&rows(), "bc-").len(), 1);
        assert_eq!(filter_list(&rows(), "22")[0].nombre, "Sucursal Norte");
    }

    #[test]
    fn test_get_field_value() {
        let row = &rows()[1];
        assert_eq!(row.get_field_value("nombre").as_deref(), Some("Sucursal Norte"));
        assert_eq!(row.get_field_value("id").as_deref(), Some("22"));
        assert_eq!(row.get_field_value("codigo"), None);
        assert_eq!(row.get_field_value("otro"), None);
    }
}
