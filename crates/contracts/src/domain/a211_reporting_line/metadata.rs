use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a211",
    "Reporte jerárquico",
    "Reportes jerárquicos",
    Gender::Masculine,
    "sitemap",
    ErrorMessages::new("Reporte jerárquico no encontrado", "Ya existe este reporte jerárquico"),
)
.invalid_form("Por favor complete todos los campos obligatorios");

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("subordinadoId", "Subordinado", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("jefeId", "Jefe", FieldKind::Ref).rules(ValidationRules::required()),
    FieldMetadata::new("fechaInicio", "Fecha de inicio", FieldKind::Date)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaFin", "Fecha de fin", FieldKind::Date),
    FieldMetadata::new("activo", "Activo", FieldKind::Bool),
];
