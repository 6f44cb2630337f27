use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a205",
    "Proceso",
    "Procesos",
    Gender::Masculine,
    "settings",
    ErrorMessages::new("Proceso no encontrado", "Ya existe un proceso con ese código"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text).rules(ValidationRules::required()),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text).rules(ValidationRules::required()),
];
