use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a402",
    "Tipo de cliente",
    "Tipos de cliente",
    Gender::Masculine,
    "users",
    ErrorMessages::new(
        "Tipo de cliente no encontrado",
        "El tipo de cliente ya existe con ese código",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(100)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
