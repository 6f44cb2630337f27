use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a307",
    "Cuenta contable",
    "Cuentas contables",
    Gender::Feminine,
    "wallet",
    ErrorMessages::not_found("Cuenta contable no encontrada"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea)
        .rules(ValidationRules::required().min_len(5)),
];
