use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a102",
    "Rol",
    "Roles",
    Gender::Masculine,
    "shield",
    ErrorMessages::new("Rol no encontrado.", "Ya existe un rol con ese nombre."),
);

pub const FIELDS: &[FieldMetadata] = &[FieldMetadata::new("nombre", "Nombre del rol", FieldKind::Text)
    .rules(ValidationRules::required().min_len(3))
    .placeholder("Administrador")];
