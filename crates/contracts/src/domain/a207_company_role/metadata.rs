use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a207",
    "Rol de empresa",
    "Roles de empresa",
    Gender::Masculine,
    "shield",
    ErrorMessages::new(
        "Rol de empresa no encontrado",
        "Ya existe un rol con ese nombre en la empresa",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text).rules(ValidationRules::required()),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea),
    FieldMetadata::new("empresaId", "Empresa", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("rolPadreId", "Rol padre", FieldKind::Ref),
];
