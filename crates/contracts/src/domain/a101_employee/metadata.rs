use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a101",
    "Empleado",
    "Empleados",
    Gender::Masculine,
    "users",
    ErrorMessages::new(
        "Empleado no encontrado.",
        "Ya existe un empleado con esa cédula.",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre completo", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("cedula", "Cédula", FieldKind::Text)
        .rules(ValidationRules::required().min_len(10))
        .placeholder("0102030405"),
    FieldMetadata::new("direccion", "Dirección", FieldKind::Text)
        .rules(ValidationRules::required()),
    FieldMetadata::new("telefono", "Teléfono", FieldKind::Text)
        .rules(ValidationRules::required().min_len(10)),
    FieldMetadata::new("email", "Email", FieldKind::Email)
        .rules(ValidationRules::required().email()),
];
