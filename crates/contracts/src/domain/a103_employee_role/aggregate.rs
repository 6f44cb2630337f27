use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a101_employee::Persona;
use crate::domain::a102_access_role::RolAcceso;
use crate::domain::common::AggregateRoot;
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{DeletePrompt, EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Asignación de un rol de acceso a un empleado
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaRol {
    pub id: i64,
    pub persona_id: i64,
    pub rol_id: i64,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRolRequest {
    pub persona_id: i64,
    pub rol_id: i64,
}

/// Fila de la pantalla con los nombres resueltos
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRolDetalle {
    #[serde(flatten)]
    pub base: PersonaRol,
    pub persona_nombre: String,
    pub persona_cedula: String,
    pub rol_nombre: String,
}

pub fn enrich(
    asignaciones: &[PersonaRol],
    personas: &[Persona],
    roles: &[RolAcceso],
) -> Vec<PersonaRolDetalle> {
    let personas = Lookup::by(personas, |p| p.id);
    let roles = Lookup::by(roles, |r| r.id);
    asignaciones
        .iter()
        .map(|a| PersonaRolDetalle {
            base: a.clone(),
            persona_nombre: personas.text(Some(a.persona_id), |p| p.nombre.clone(), UNKNOWN),
            persona_cedula: personas.text(Some(a.persona_id), |p| p.cedula.clone(), NOT_AVAILABLE),
            rol_nombre: roles.text(Some(a.rol_id), |r| r.nombre.clone(), UNKNOWN),
        })
        .collect()
}

impl Searchable for PersonaRolDetalle {
    const SEARCH_FIELDS: &'static [&'static str] = &["personaNombre", "personaCedula", "rolNombre"];
}

impl AggregateRoot for PersonaRolDetalle {
    type Request = PersonaRolRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> PersonaRolRequest {
        PersonaRolRequest {
            persona_id: self.base.persona_id,
            rol_id: self.base.rol_id,
        }
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.persona_nombre, self.rol_nombre)
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn delete_prompt(&self) -> DeletePrompt {
        DeletePrompt::Custom {
            message: format!(
                "¿Eliminar el rol \"{}\" de {}?",
                self.rol_nombre, self.persona_nombre
            ),
            title: "Confirmar eliminación",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    fn personas() -> Vec<Persona> {
        vec![Persona {
            id: 1,
            nombre: "Ana Torres".into(),
            cedula: "0102030405".into(),
            ..Persona::default()
        }]
    }

    fn roles() -> Vec<RolAcceso> {
        vec![RolAcceso {
            id: 9,
            nombre: "Bodeguero".into(),
            activo: true,
        }]
    }

    #[test]
    fn test_enrich_with_fallbacks() {
        let asignaciones = vec![
            PersonaRol {
                id: 1,
                persona_id: 1,
                rol_id: 9,
                activo: true,
            },
            PersonaRol {
                id: 2,
                persona_id: 77,
                rol_id: 88,
                activo: true,
            },
        ];
        let rows = enrich(&asignaciones, &personas(), &roles());
        assert_eq!(rows[0].persona_nombre, "Ana Torres");
        assert_eq!(rows[0].rol_nombre, "Bodeguero");
        assert_eq!(rows[1].persona_nombre, "Desconocido");
        assert_eq!(rows[1].persona_cedula, "N/A");
        assert_eq!(rows[1].rol_nombre, "Desconocido");
    }

    #[test]
    fn test_delete_prompt_and_search() {
        let rows = enrich(
            &[PersonaRol {
                id: 1,
                persona_id: 1,
                rol_id: 9,
                activo: true,
            }],
            &personas(),
            &roles(),
        );
        assert_eq!(
            rows[0].delete_prompt(),
            DeletePrompt::Custom {
                message: "¿Eliminar el rol \"Bodeguero\" de Ana Torres?".into(),
                title: "Confirmar eliminación",
            }
        );
        assert!(rows[0].matches_filter("0102"));
        assert!(rows[0].matches_filter("bodeg"));
    }

    #[test]
    fn test_unselected_refs_are_invalid() {
        let errors = validate_form(&PersonaRolRequest::default(), FIELDS);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            ENTITY_METADATA.invalid_form,
            "Por favor, selecciona un empleado y un rol."
        );
    }
}
