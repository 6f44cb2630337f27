use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a411",
    "Detalle de factura",
    "Detalles de factura",
    Gender::Masculine,
    "list",
    ErrorMessages::not_found("No se encontraron detalles para esta factura"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("facturaId", "Factura", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("productoId", "Producto", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::Text)
        .rules(ValidationRules::required()),
    FieldMetadata::new("cantidad", "Cantidad", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.01)),
    FieldMetadata::new("precioUnitario", "Precio unitario", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.0)),
    FieldMetadata::new("descuentoPorcentaje", "Descuento (%)", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("descuentoMonto", "Descuento ($)", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("impuestoPorcentaje", "Impuesto (%)", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("impuestoMonto", "Impuesto ($)", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0))
        .read_only(),
    FieldMetadata::new("subtotal", "Subtotal", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.0))
        .read_only(),
    FieldMetadata::new("total", "Total", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.0))
        .read_only(),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::TextArea),
];
