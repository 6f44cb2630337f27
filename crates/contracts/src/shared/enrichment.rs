//! In-memory joins used to build "detalle" rows
//!
//! Las pantallas cargan varias listas en paralelo y luego resuelven las
//! claves foráneas aquí, sin más llamadas al servidor.

use std::collections::HashMap;

/// Fallback for a reference that does not resolve
pub const UNKNOWN: &str = "Desconocido";
/// Fallback for a secondary attribute of an unresolved reference
pub const NOT_AVAILABLE: &str = "N/A";

/// Index of a loaded list by id
pub struct Lookup<'a, T> {
    index: HashMap<i64, &'a T>,
}

impl<'a, T> Lookup<'a, T> {
    pub fn by(items: &'a [T], key: fn(&T) -> i64) -> Self {
        Self {
            index: items.iter().map(|item| (key(item), item)).collect(),
        }
    }

    pub fn get(&self, id: Option<i64>) -> Option<&'a T> {
        id.and_then(|id| self.index.get(&id).copied())
    }

    /// Text from the referenced item or `fallback`
    pub fn text(&self, id: Option<i64>, f: impl Fn(&T) -> String, fallback: &str) -> String {
        self.get(id).map(f).unwrap_or_else(|| fallback.to_string())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rol {
        id: i64,
        nombre: &'static str,
    }

    #[test]
    fn test_lookup() {
        let roles = vec![
            Rol { id: 1, nombre: "Admin" },
            Rol { id: 5, nombre: "Bodeguero" },
        ];
        let lookup = Lookup::by(&roles, |r| r.id);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get(Some(5)).map(|r| r.nombre), Some("Bodeguero"));
        assert!(lookup.get(None).is_none());
        assert_eq!(lookup.text(Some(9), |r| r.nombre.to_string(), UNKNOWN), "Desconocido");
        assert_eq!(lookup.text(Some(1), |r| r.nombre.to_string(), UNKNOWN), "Admin");
    }
}
