use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a413",
    "Cuenta por cobrar",
    "Cuentas por cobrar",
    Gender::Feminine,
    "wallet",
    ErrorMessages::new("Cuenta por cobrar no encontrada", "La cuenta por cobrar ya existe"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("numeroCuenta", "Número de cuenta", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("facturaId", "Factura", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("clienteId", "Cliente", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("fechaEmision", "Fecha de emisión", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaVencimiento", "Fecha de vencimiento", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("diasCredito", "Días de crédito", FieldKind::Integer)
        .rules(ValidationRules::required().min(0.0)),
    FieldMetadata::new("montoOriginal", "Monto original", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.01)),
    FieldMetadata::new("montoPagado", "Monto pagado", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::TextArea),
];
