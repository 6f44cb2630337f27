use crate::shared::api_error::ErrorMessages;
use crate::shared::metadata::{
    EntityMetadataInfo, FieldKind, FieldMetadata, Gender, ValidationRules,
};

pub const TIPOS_IDENTIFICACION: &[(&str, &str)] = &[
    ("RUC", "RUC"),
    ("CEDULA", "Cédula"),
    ("PASAPORTE", "Pasaporte"),
];

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo::new(
    "a407",
    "Cliente",
    "Clientes",
    Gender::Masculine,
    "user",
    ErrorMessages::new(
        "Cliente no encontrado",
        "El cliente ya existe con ese número de identificación",
    ),
);

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "tipoIdentificacion",
        "Tipo de identificación",
        FieldKind::Choice(TIPOS_IDENTIFICACION),
    )
    .rules(ValidationRules::required()),
    FieldMetadata::new("numeroIdentificacion", "Número de identificación", FieldKind::Text)
        .rules(ValidationRules::required().min_len(8)),
    FieldMetadata::new("razonSocial", "Razón social", FieldKind::Text),
    FieldMetadata::new("nombreComercial", "Nombre comercial", FieldKind::Text),
    FieldMetadata::new("nombres", "Nombres", FieldKind::Text),
    FieldMetadata::new("apellidos", "Apellidos", FieldKind::Text),
    FieldMetadata::new("tipoClienteId", "Tipo de cliente", FieldKind::Ref),
    FieldMetadata::new("zonaVentaId", "Zona de venta", FieldKind::Ref),
    FieldMetadata::new("vendedorId", "Vendedor", FieldKind::Ref),
    FieldMetadata::new("segmento", "Segmento", FieldKind::Text),
    FieldMetadata::new("categoria", "Categoría", FieldKind::Text),
    FieldMetadata::new("listaPreciosId", "Lista de precios", FieldKind::Ref),
    FieldMetadata::new("condicionPagoId", "Condición de pago", FieldKind::Ref),
    FieldMetadata::new("limiteCredito", "Límite de crédito", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("descuentoGeneral", "Descuento general (%)", FieldKind::Decimal)
        .rules(ValidationRules::none().min(0.0)),
    FieldMetadata::new("email", "Email", FieldKind::Email).rules(ValidationRules::none().email()),
    FieldMetadata::new("telefono", "Teléfono", FieldKind::Text),
    FieldMetadata::new("celular", "Celular", FieldKind::Text),
    FieldMetadata::new("direccion", "Dirección", FieldKind::Text),
    FieldMetadata::new("ciudad", "Ciudad", FieldKind::Text),
    FieldMetadata::new("provincia", "Provincia", FieldKind::Text),
    FieldMetadata::new("pais", "País", FieldKind::Text),
    FieldMetadata::new("codigoPostal", "Código postal", FieldKind::Text),
    FieldMetadata::new("observaciones", "Observaciones", FieldKind::TextArea),
];
