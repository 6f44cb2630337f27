use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a309",
    "Tipo de producto",
    "Tipos de producto",
    Gender::Masculine,
    "box",
    ErrorMessages::new(
        "Tipo de producto no encontrado",
        "Ya existe un tipo de producto con ese nombre",
    ),
)
.invalid_form("Por favor complete todos los campos correctamente");

pub const FIELDS: &[FieldMetadata] = &[FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
    .rules(ValidationRules::required().max_len(100))];
