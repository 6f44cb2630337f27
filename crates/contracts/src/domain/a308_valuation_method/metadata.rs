use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a308",
    "Método de valuación",
    "Métodos de valuación",
    Gender::Masculine,
    "settings",
    ErrorMessages::not_found("Método de valuación no encontrado"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea)
        .rules(ValidationRules::required().min_len(5)),
];
