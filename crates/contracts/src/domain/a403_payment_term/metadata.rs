use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a403",
    "Condición de pago",
    "Condiciones de pago",
    Gender::Feminine,
    "calendar",
    ErrorMessages::new(
        "Condición de pago no encontrada",
        "La condición de pago ya existe con ese código",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("codigo", "Código", FieldKind::Text)
        .rules(ValidationRules::required().max_len(20)),
    FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
        .rules(ValidationRules::required().max_len(100)),
    FieldMetadata::new("descripcion", "Descripción", FieldKind::TextArea),
    FieldMetadata::new("diasCredito", "Días de crédito", FieldKind::Integer)
        .rules(ValidationRules::required().min(0.0)),
    FieldMetadata::new("requiereGarantia", "Requiere garantía", FieldKind::Bool),
    FieldMetadata::new(
        "requiereAprobacionCredito",
        "Requiere aprobación de crédito",
        FieldKind::Bool,
    ),
    FieldMetadata::new("permiteCuotas", "Permite cuotas", FieldKind::Bool),
    FieldMetadata::new("numeroCuotasMaximo", "Cuotas máximas", FieldKind::Integer)
        .rules(ValidationRules::none().min(1.0)),
    FieldMetadata::new("esPredeterminado", "Predeterminada", FieldKind::Bool),
];
