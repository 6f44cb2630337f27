use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a316",
    "Detalle de movimiento",
    "Detalles de movimiento",
    Gender::Masculine,
    "list",
    ErrorMessages::not_found("Detalle de movimiento no encontrado"),
);

/// Campos de una línea, editados dentro del formulario del movimiento
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("productoId", "Producto", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("loteId", "Lote", FieldKind::Ref),
    FieldMetadata::new("cantidad", "Cantidad", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.01)),
    FieldMetadata::new("costoUnitario", "Costo unitario", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.0)),
    FieldMetadata::new("ubicacionFisica", "Ubicación física", FieldKind::Text),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::Text),
];
