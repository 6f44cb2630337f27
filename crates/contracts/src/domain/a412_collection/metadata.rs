use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a412",
    "Cobro",
    "Cobros",
    Gender::Masculine,
    "cash",
    ErrorMessages::new("Cobro no encontrado", "El cobro ya existe con ese número"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("numeroCobro", "Número de cobro", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("clienteId", "Cliente", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("fechaCobro", "Fecha de cobro", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("formaPagoId", "Forma de pago", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("numeroDocumento", "Número de documento", FieldKind::Text)
        .rules(ValidationRules::none().max_len(50)),
    FieldMetadata::new("fechaDocumento", "Fecha del documento", FieldKind::Date),
    FieldMetadata::new("montoTotal", "Monto total", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.01)),
    FieldMetadata::new("tipoCambio", "Tipo de cambio", FieldKind::Decimal),
    FieldMetadata::new("moneda", "Moneda", FieldKind::Text),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::TextArea),
];
