use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a404",
    "Forma de pago",
    "Formas de pago",
    Gender::Feminine,
    "credit-card",
    ErrorMessages::new(
        "Forma de pago no encontrada",
        "La forma de pago ya existe con ese código",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().max_len(10)),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(100)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea),
    FieldMetadata::new("requiereReferencia", "Requiere referencia", FieldKind::Bool),
    FieldMetadata::new("activo", "Activa", FieldKind::Bool),
];
