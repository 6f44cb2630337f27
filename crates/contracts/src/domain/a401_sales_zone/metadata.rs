use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a401",
    "Zona de venta",
    "Zonas de venta",
    Gender::Feminine,
    "map",
    ErrorMessages::new(
        "Zona de venta no encontrada",
        "La zona de venta ya existe con ese código",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(100)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea),
    FieldMetadata::new("activo", "Activa", FieldKind::Bool),
];
