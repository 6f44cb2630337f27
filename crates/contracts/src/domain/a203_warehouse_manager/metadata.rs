use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a203",
    "Responsable de bodega",
    "Responsables de bodega",
    Gender::Masculine,
    "warehouse",
    ErrorMessages::new(
        "Bodega responsable no encontrada",
        "Ya existe un responsable asignado para esta bodega",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("bodegaId", "Bodega", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("personaEmpresaId", "Responsable", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaInicio", "Fecha de inicio", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaFin", "Fecha de fin", FieldKind::Date),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
