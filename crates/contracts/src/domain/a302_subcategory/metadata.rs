use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a302",
    "Subcategoría",
    "Subcategorías",
    Gender::Feminine,
    "tag",
    ErrorMessages::not_found("Subcategoría no encontrada"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().min_len(2)),
    FieldMetadata::new("categoriaId", "Categoría", FieldKind::Ref).rules(ValidationRules::required()),
];
