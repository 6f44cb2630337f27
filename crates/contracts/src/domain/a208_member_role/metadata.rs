use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a208",
    "Asignación de rol",
    "Roles de personas",
    Gender::Feminine,
    "user-check",
    ErrorMessages::new(
        "Relación persona-empresa-rol no encontrada",
        "Ya existe esta asignación de rol",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("personaEmpresaId", "Persona", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("rolEmpresaId", "Rol", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("fechaAsignacion", "Fecha de asignación", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaFin", "Fecha de fin", FieldKind::Date),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
