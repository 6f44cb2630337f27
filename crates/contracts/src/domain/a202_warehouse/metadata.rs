use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a202",
    "Bodega",
    "Bodegas",
    Gender::Feminine,
    "warehouse",
    ErrorMessages::new("Bodega no encontrada", "Ya existe una bodega con ese código"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(100)),
    FieldMetadata::new("direccion", "Dirección", FieldKind::Text)
        .rules(ValidationRules::required().max_len(200)),
    FieldMetadata::new("empresaId", "Empresa", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("unidadOrganizacionalId", "Unidad organizacional", FieldKind::Ref),
];
