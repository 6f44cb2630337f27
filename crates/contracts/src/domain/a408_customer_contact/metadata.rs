use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a408",
    "Contacto",
    "Contactos de cliente",
    Gender::Masculine,
    "phone",
    ErrorMessages::not_found("Contacto no encontrado"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("clienteId", "Cliente", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("nombres", "Nombres", FieldKind::Text)
        .rules(ValidationRules::required().min_len(2)),
    FieldMetadata::new("apellidos", "Apellidos", FieldKind::Text)
        .rules(ValidationRules::required().min_len(2)),
    FieldMetadata::new("area", "Área", FieldKind::Text),
    FieldMetadata::new("cargo", "Cargo", FieldKind::Text),
    FieldMetadata::new("telefono", "Teléfono", FieldKind::Text),
    FieldMetadata::new("celular", "Celular", FieldKind::Text),
    FieldMetadata::new("email", "Email", FieldKind::Email).rules(ValidationRules::none().email()),
    FieldMetadata::new("esPrincipal", "Contacto principal", FieldKind::Bool),
    FieldMetadata::new("recibeFacturas", "Recibe facturas", FieldKind::Bool),
    FieldMetadata::new("recibeCotizaciones", "Recibe cotizaciones", FieldKind::Bool),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::TextArea),
];
