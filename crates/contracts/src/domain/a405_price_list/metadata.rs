use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const TIPOS_LISTA: &[(&str, &str)] = &[
    ("PUBLICO", "Público"),
    ("MAYORISTA", "Mayorista"),
    ("DISTRIBUIDOR", "Distribuidor"),
    ("ESPECIAL", "Especial"),
];

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a405",
    "Lista de precios",
    "Listas de precios",
    Gender::Feminine,
    "list",
    ErrorMessages::new(
        "Lista de precios no encontrada",
        "La lista de precios ya existe con ese código",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(100)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea),
    FieldMetadata::new("tipoLista", "Tipo de lista", FieldKind::Choice(TIPOS_LISTA))
        .rules(ValidationRules::required()),
    FieldMetadata::new("monedaId", "Moneda", FieldKind::Integer)
        .rules(ValidationRules::required().min(1.0)),
    FieldMetadata::new("fechaVigenciaDesde", "Vigente desde", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaVigenciaHasta", "Vigente hasta", FieldKind::Date),
    FieldMetadata::new("activo", "Activa", FieldKind::Bool),
];
