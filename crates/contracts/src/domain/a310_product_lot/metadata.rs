use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a310",
    "Lote",
    "Lotes de producto",
    Gender::Masculine,
    "box",
    ErrorMessages::new("Lote de producto no encontrado", "Ya existe un lote con ese número"),
)
.invalid_form("Por favor complete todos los campos correctamente");

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("numeroLote", "Número de lote", FieldKind::Text)
        .rules(ValidationRules::required().max_len(50)),
    FieldMetadata::new("fechaFabricacion", "Fecha de fabricación", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaVencimiento", "Fecha de vencimiento", FieldKind::Date)
        .rules(ValidationRules::required()),
];
