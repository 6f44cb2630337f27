use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a304",
    "Subgrupo",
    "Subgrupos",
    Gender::Masculine,
    "layers",
    ErrorMessages::not_found("Subgrupo no encontrado"),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().min_len(3)),
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().min_len(2)),
    FieldMetadata::new("grupoId", "Grupo", FieldKind::Ref).rules(ValidationRules::required()),
];
