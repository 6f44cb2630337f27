use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const TEMPERATURAS: &[(&str, &str)] = &[
    ("AMBIENTE", "Ambiente"),
    ("REFRIGERADO", "Refrigerado"),
    ("CONGELADO", "Congelado"),
];

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a311",
    "Producto",
    "Productos",
    Gender::Masculine,
    "box",
    ErrorMessages::new("Producto no encontrado", "Ya existe un producto con ese SKU"),
)
.invalid_form("Por favor complete todos los campos requeridos correctamente");

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("sku", "SKU", FieldKind::Text)
        .rules(ValidationRules::required().max_len(50)),
    FieldMetadata::new("codigoBarras", "Código de barras", FieldKind::Text)
        .rules(ValidationRules::none().max_len(50)),
    FieldMetadata::new("codigoInterno", "Código interno", FieldKind::Text)
        .rules(ValidationRules::none().max_len(50)),
    FieldMetadata::new("productoNombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(200)),
    FieldMetadata::new("presentacion", "Presentación", FieldKind::Text)
        .rules(ValidationRules::none().max_len(100)),
    FieldMetadata::new("temperatura", "Temperatura", FieldKind::Choice(TEMPERATURAS))
        .rules(ValidationRules::required()),
    FieldMetadata::new("peso", "Peso", FieldKind::Decimal).rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("volumen", "Volumen", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("unidadMedida", "Unidad de medida", FieldKind::Text)
        .rules(ValidationRules::none().max_len(20)),
    FieldMetadata::new("cantidadMaxima", "Cantidad máxima", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("cantidadMinimo", "Cantidad mínima", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("cantidadPorCaja", "Cantidad por caja", FieldKind::Integer)
        .rules(ValidationRules::required().min(1.0)),
    FieldMetadata::new("estado", "Habilitado", FieldKind::Bool),
    FieldMetadata::new("fechaAlta", "Fecha de alta", FieldKind::Date),
    FieldMetadata::new("lineaNegocioId", "Línea de negocio", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("subgrupoId", "Subgrupo", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("productoTipoId", "Tipo de producto", FieldKind::Ref)
        .rules(ValidationRules::required()),
];
