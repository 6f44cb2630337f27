use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a103",
    "Rol",
    "Asignaciones de rol",
    Gender::Masculine,
    "user-check",
    ErrorMessages::new(
        "Asignación no encontrada.",
        "Este empleado ya tiene asignado este rol.",
    ),
)
.invalid_form("Por favor, selecciona un empleado y un rol.");

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("personaId", "Empleado", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("rolId", "Rol", FieldKind::Ref).rules(ValidationRules::required()),
];
