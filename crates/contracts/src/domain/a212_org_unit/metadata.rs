use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a212",
    "Unidad organizacional",
    "Unidades organizacionales",
    Gender::Feminine,
    "sitemap",
    ErrorMessages::new(
        "Unidad organizacional no encontrada",
        "Ya existe una unidad organizacional con este código",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text).rules(ValidationRules::required()),
    FieldMetadata::new("tipo", "Tipo", FieldKind::Text)
        .rules(ValidationRules::required())
        .placeholder("Ej: Gerencia, Departamento, Área"),
    FieldMetadata::new("empresaId", "Empresa", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("unidadPadreId", "Unidad padre", FieldKind::Ref),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
