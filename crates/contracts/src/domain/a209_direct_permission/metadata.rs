use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a209",
    "Permiso directo",
    "Permisos directos",
    Gender::Masculine,
    "shield",
    ErrorMessages::new("Permiso directo no encontrado", "Ya existe este permiso directo"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("personaEmpresaId", "Persona", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("accionProcesoId", "Acción", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaInicio", "Fecha de inicio", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaFin", "Fecha de fin", FieldKind::Date),
];
