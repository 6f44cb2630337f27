use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a410",
    "Factura",
    "Facturas",
    Gender::Feminine,
    "file-text",
    ErrorMessages::new("Factura no encontrada", "Ya existe una factura con ese número"),
)
.invalid_form("Por favor complete todos los campos requeridos");

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("numeroFactura", "Número de factura", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("ordenVentaId", "Orden de venta", FieldKind::Integer)
        .rules(ValidationRules::required().min(1.0)),
    FieldMetadata::new("despachoId", "Despacho", FieldKind::Integer),
    FieldMetadata::new("clienteId", "Cliente", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("direccionFacturacionId", "Dirección de facturación", FieldKind::Ref),
    FieldMetadata::new("fechaEmision", "Fecha de emisión", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaVencimiento", "Fecha de vencimiento", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("formaPagoId", "Forma de pago", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("referenciaPago", "Referencia de pago", FieldKind::Text)
        .rules(ValidationRules::none().max_len(100)),
    FieldMetadata::new("subtotal", "Subtotal", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.0)),
    FieldMetadata::new("descuentoMonto", "Descuento", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("impuestoMonto", "Impuesto", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.0)),
    FieldMetadata::new("total", "Total", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.0))
        .read_only(),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::TextArea),
    FieldMetadata::new("emailDestinatario", "Email destinatario", FieldKind::Email)
        .rules(ValidationRules::none().email().max_len(255)),
];
