use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const AFECTA_INVENTARIO: &[(&str, &str)] =
    &[("ENTRADA", "Entrada"), ("SALIDA", "Salida"), ("NEUTRO", "Neutro")];

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a314",
    "Tipo de movimiento",
    "Tipos de movimiento",
    Gender::Masculine,
    "truck",
    ErrorMessages::not_found("Tipo de movimiento no encontrado"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().min_len(2)),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea),
    FieldMetadata::new(
        "afectaInventario",
        "Afecta inventario",
        FieldKind::Choice(AFECTA_INVENTARIO),
    )
    .rules(ValidationRules::required()),
    FieldMetadata::new("requiereAprobacion", "Requiere aprobación", FieldKind::Bool),
    FieldMetadata::new("generaAsiento", "Genera asiento", FieldKind::Bool),
];
