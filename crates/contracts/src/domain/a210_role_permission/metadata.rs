use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a210",
    "Permiso de rol",
    "Permisos de roles",
    Gender::Masculine,
    "shield",
    ErrorMessages::new(
        "Permiso de rol-proceso no encontrado",
        "Ya existe este permiso para el rol",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("rolEmpresaId", "Rol", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("accionProcesoId", "Acción", FieldKind::Ref)
        .rules(ValidationRules::required()),
];
