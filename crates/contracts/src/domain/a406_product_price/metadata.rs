use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const MIN_PRICE_MESSAGE: &str = "El precio mínimo no puede ser mayor que el precio";

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a406",
    "Precio",
    "Precios de producto",
    Gender::Masculine,
    "dollar",
    ErrorMessages::new(
        "Precio de producto no encontrado",
        "Ya existe un precio para este producto en la lista",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("listaPreciosId", "Lista de precios", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("productoId", "Producto", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("precio", "Precio", FieldKind::Decimal)
        .rules(ValidationRules::required().min(0.01)),
    FieldMetadata::new("precioMinimo", "Precio mínimo", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.01)),
    FieldMetadata::new("fechaVigenciaDesde", "Vigente desde", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaVigenciaHasta", "Vigente hasta", FieldKind::Date),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
