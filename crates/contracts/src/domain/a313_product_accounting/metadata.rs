use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a313",
    "Configuración contable",
    "Configuración contable",
    Gender::Feminine,
    "wallet",
    ErrorMessages::new(
        "Configuración contable no encontrada",
        "Ya existe una configuración contable para este producto",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("productoId", "Producto", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("cuentaContableId", "Cuenta contable", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("centroCostosId", "Centro de costos", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("metodoValuacionId", "Método de valuación", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
