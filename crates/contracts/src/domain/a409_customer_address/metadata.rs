use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const TIPOS_DIRECCION: &[(&str, &str)] = &[
    ("FACTURACION", "Facturación"),
    ("ENVIO", "Envío"),
    ("AMBAS", "Ambas"),
];

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a409",
    "Dirección",
    "Direcciones de cliente",
    Gender::Feminine,
    "map-pin",
    ErrorMessages::not_found("Dirección no encontrada"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("clienteId", "Cliente", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new(
        "tipoDireccion",
        "Tipo de dirección",
        FieldKind::Choice(TIPOS_DIRECCION),
    ),
    FieldMetadata::new("nombreDireccion", "Nombre", FieldKind::Text)
        .placeholder("Ej: Matriz, Bodega norte"),
    FieldMetadata::new("direccion", "Dirección", FieldKind::Text)
        .rules(ValidationRules::required()),
    FieldMetadata::new("ciudad", "Ciudad", FieldKind::Text),
    FieldMetadata::new("provincia", "Provincia", FieldKind::Text),
    FieldMetadata::new("codigoPostal", "Código postal", FieldKind::Text),
    FieldMetadata::new("referencia", "Referencia", FieldKind::TextArea),
    FieldMetadata::new("contacto", "Contacto", FieldKind::Text),
    FieldMetadata::new("telefono", "Teléfono", FieldKind::Text),
    FieldMetadata::new("esPrincipal", "Dirección principal", FieldKind::Bool),
    FieldMetadata::new("activo", "Activa", FieldKind::Bool),
];
