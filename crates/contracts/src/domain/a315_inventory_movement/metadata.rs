use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const ESTADOS: &[(&str, &str)] = &[
    ("BORRADOR", "Borrador"),
    ("CONFIRMADO", "Confirmado"),
    ("CONTABILIZADO", "Contabilizado"),
    ("ANULADO", "Anulado"),
];

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a315",
    "Movimiento",
    "Movimientos de inventario",
    Gender::Masculine,
    "truck",
    ErrorMessages::not_found("Movimiento de inventario no encontrado"),
);

/// Cabecera del movimiento; las líneas se editan aparte
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("numeroMovimiento", "Número", FieldKind::Text)
        .rules(ValidationRules::required()),
    FieldMetadata::new("tipoMovimientoId", "Tipo de movimiento", FieldKind::Ref)
        .rules(ValidationRules::required()),
    FieldMetadata::new("bodegaOrigenId", "Bodega origen", FieldKind::Ref),
    FieldMetadata::new("bodegaDestinoId", "Bodega destino", FieldKind::Ref),
    FieldMetadata::new("fechaMovimiento", "Fecha del movimiento", FieldKind::DateTime)
        .rules(ValidationRules::required()),
    FieldMetadata::new("fechaContabilizacion", "Fecha de contabilización", FieldKind::DateTime),
    FieldMetadata::new("documentoReferencia", "Documento de referencia", FieldKind::Text),
    FieldMetadata::new("tipoDocumentoReferencia", "Tipo de documento", FieldKind::Text),
    FieldMetadata::new("motivo", "Motivo", FieldKind::Text),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::TextArea),
    FieldMetadata::new("estado", "Estado", FieldKind::Choice(ESTADOS))
        .rules(ValidationRules::required()),
];
