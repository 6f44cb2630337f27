use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a201",
    "Empresa",
    "Empresas",
    Gender::Feminine,
    "building",
    ErrorMessages::new("Empresa no encontrada", "Ya existe una empresa con ese NIT"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nit", "NIT / RUC", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20))
        .placeholder("1234567890001"),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(100)),
    FieldMetadata::new("direccion", "Dirección", FieldKind::Text)
        .rules(ValidationRules::required().max_len(200)),
    FieldMetadata::new("telefono", "Teléfono", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("email", "Email", FieldKind::Email)
        .rules(ValidationRules::required().email().max_len(100)),
];
