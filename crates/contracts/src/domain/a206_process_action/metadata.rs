use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a206",
    "Acción de proceso",
    "Acciones de proceso",
    Gender::Feminine,
    "list",
    ErrorMessages::new(
        "Acción de proceso no encontrada",
        "Ya existe una acción con ese código",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required())
        .placeholder("Ej: CREAR, EDITAR, APROBAR"),
    FieldMetadata::new("procesoId", "Proceso", FieldKind::Ref).rules(ValidationRules::required()),
];
