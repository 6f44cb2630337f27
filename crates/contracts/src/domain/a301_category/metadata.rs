use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a301",
    "Categoría",
    "Categorías",
    Gender::Feminine,
    "tag",
    ErrorMessages::not_found("Categoría no encontrada"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().min_len(2)),
];
