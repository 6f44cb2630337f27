use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a305",
    "Línea de negocio",
    "Líneas de negocio",
    Gender::Feminine,
    "list",
    ErrorMessages::not_found("Línea de negocio no encontrada"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().min_len(2)),
];
