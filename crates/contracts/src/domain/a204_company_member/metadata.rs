use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a204",
    "Persona empresa",
    "Personas empresa",
    Gender::Feminine,
    "user-check",
    ErrorMessages::new(
        "Persona empresa no encontrada",
        "Ya existe una asignación para esta persona en esta empresa",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("personaId", "Empleado", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("empresaId", "Empresa", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("unidadOrganizacionalId", "Unidad organizacional", FieldKind::Ref),
    FieldMetadata::new("fechaIngreso", "Fecha de ingreso", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaSalida", "Fecha de salida", FieldKind::Date),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
