use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a306",
    "Centro de costos",
    "Centros de costos",
    Gender::Masculine,
    "wallet",
    ErrorMessages::not_found("Centro de costos no encontrado"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea)
        .rules(ValidationRules::required().min_len(5)),
];
