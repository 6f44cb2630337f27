use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a312",
    "Registro de existencias",
    "Existencias",
    Gender::Masculine,
    "warehouse",
    ErrorMessages::new(
        "Existencias no encontradas",
        "Ya existe un registro de existencias para esta combinación producto-bodega-lote",
    ),
);

const CANTIDAD: ValidationRules = ValidationRules::required().min(0.0);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("productoId", "Producto", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("bodegaId", "Bodega", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("productoLoteId", "Lote", FieldKind::Ref),
    FieldMetadata::new("cantidadFisica", "Cantidad física", FieldKind::Decimal).rules(CANTIDAD),
    FieldMetadata::new("cantidadDisponible", "Cantidad disponible", FieldKind::Decimal)
        .rules(CANTIDAD),
    FieldMetadata::new("cantidadReservada", "Cantidad reservada", FieldKind::Decimal)
        .rules(CANTIDAD),
    FieldMetadata::new("costoPromedio", "Costo promedio", FieldKind::Decimal).rules(CANTIDAD),
    FieldMetadata::new("ubicacion", "Ubicación", FieldKind::Text),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
