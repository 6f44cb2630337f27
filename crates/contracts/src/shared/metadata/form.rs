//! Generic form helpers driven by field metadata
//!
//! Requests are handled through their serde representation: the field
//! `name` in [`FieldMetadata`] is the key the request serializes to.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::field_type::FieldKind;
use super::types::FieldMetadata;

/// Field name -> inline error message
pub type FormErrors = BTreeMap<&'static str, String>;

fn to_object<T: Serialize>(form: &T) -> Map<String, Value> {
    match serde_json::to_value(form) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Validate every field of `form` against its rules
pub fn validate_form<T: Serialize>(form: &T, fields: &[FieldMetadata]) -> FormErrors {
    let object = to_object(form);
    fields
        .iter()
        .filter_map(|field| {
            let mut value = object.get(field.name).unwrap_or(&Value::Null);
            // id 0 en una referencia significa "sin seleccionar"
            if matches!(field.kind, FieldKind::Ref) && value.as_i64() == Some(0) {
                value = &Value::Null;
            }
            field
                .validation
                .validate_value(value)
                .err()
                .map(|message| (field.name, message))
        })
        .collect()
}

/// Text shown in an input for a JSON value
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map(|f| f.to_string()).unwrap_or_default(),
        },
        other => other.to_string(),
    }
}

/// Current text of a named field
pub fn field_text<T: Serialize>(form: &T, name: &str) -> String {
    to_object(form)
        .get(name)
        .map(value_text)
        .unwrap_or_default()
}

/// Decimal typed by the user; accepts `,` as decimal separator
pub fn parse_decimal(raw: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| "Valor numérico inválido".to_string())
}

/// Candidate JSON values for a raw input, in order of preference
fn candidates(kind: &FieldKind, raw: &str) -> Result<Vec<Value>, String> {
    let trimmed = raw.trim();
    let values = match kind {
        FieldKind::Text | FieldKind::TextArea | FieldKind::Email | FieldKind::Choice(_) => {
            vec![Value::String(raw.to_string())]
        }
        FieldKind::Date | FieldKind::DateTime => {
            if trimmed.is_empty() {
                vec![Value::Null, Value::String(String::new())]
            } else {
                vec![Value::String(trimmed.to_string())]
            }
        }
        FieldKind::Integer | FieldKind::Ref => {
            if trimmed.is_empty() {
                vec![Value::Null, Value::from(0)]
            } else {
                let n: i64 = trimmed
                    .parse()
                    .map_err(|_| "Valor numérico inválido".to_string())?;
                vec![Value::from(n)]
            }
        }
        FieldKind::Decimal => {
            if trimmed.is_empty() {
                vec![Value::Null, Value::from(0.0)]
            } else {
                let n = parse_decimal(trimmed)?;
                let number =
                    Number::from_f64(n).ok_or_else(|| "Valor numérico inválido".to_string())?;
                vec![Value::Number(number)]
            }
        }
        FieldKind::Bool => vec![Value::Bool(trimmed == "true")],
    };
    Ok(values)
}

/// Return a copy of `form` with `field` set from raw input text
///
/// Empty numeric/date input becomes `None` on optional fields and the
/// zero value on mandatory ones.
pub fn apply_input<T: Serialize + DeserializeOwned>(
    form: &T,
    field: &FieldMetadata,
    raw: &str,
) -> Result<T, String> {
    let object = to_object(form);
    let mut last_error = String::from("Valor inválido");
    for candidate in candidates(&field.kind, raw)? {
        let mut next = object.clone();
        next.insert(field.name.to_string(), candidate);
        match serde_json::from_value::<T>(Value::Object(next)) {
            Ok(updated) => return Ok(updated),
            Err(e) => last_error = e.to_string(),
        }
    }
    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::ValidationRules;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Form {
        nombre: String,
        empresa_id: i64,
        unidad_id: Option<i64>,
        precio: f64,
        fecha_fin: Option<String>,
        fecha_inicio: String,
        activo: bool,
    }

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::new("nombre", "Nombre", FieldKind::Text)
            .rules(ValidationRules::required().min_len(3)),
        FieldMetadata::new("empresaId", "Empresa", FieldKind::Ref)
            .rules(ValidationRules::required()),
        FieldMetadata::new("unidadId", "Unidad", FieldKind::Ref),
        FieldMetadata::new("precio", "Precio", FieldKind::Decimal)
            .rules(ValidationRules::required().min(0.01)),
        FieldMetadata::new("fechaFin", "Fecha fin", FieldKind::Date),
        FieldMetadata::new("fechaInicio", "Fecha inicio", FieldKind::Date)
            .rules(ValidationRules::required()),
        FieldMetadata::new("activo", "Activo", FieldKind::Bool),
    ];

    #[test]
    fn test_validate_form_reports_each_field() {
        let errors = validate_form(&Form::default(), FIELDS);
        assert_eq!(errors.get("nombre").map(String::as_str), Some("Este campo es requerido"));
        assert_eq!(
            errors.get("empresaId").map(String::as_str),
            Some("Este campo es requerido")
        );
        assert!(errors.contains_key("precio"));
        assert!(errors.contains_key("fechaInicio"));
        assert!(!errors.contains_key("unidadId"));
        assert!(!errors.contains_key("activo"));
    }

    #[test]
    fn test_validate_form_valid() {
        let form = Form {
            nombre: "Bodega".into(),
            empresa_id: 3,
            precio: 1.5,
            fecha_inicio: "2024-01-01".into(),
            ..Form::default()
        };
        assert!(validate_form(&form, FIELDS).is_empty());
    }

    #[test]
    fn test_apply_input() {
        let form = Form::default();
        let form = apply_input(&form, &FIELDS[0], "Central").unwrap();
        assert_eq!(form.nombre, "Central");

        let form = apply_input(&form, &FIELDS[1], "7").unwrap();
        assert_eq!(form.empresa_id, 7);
        // obligatorio: vacío vuelve a cero
        let form = apply_input(&form, &FIELDS[1], "").unwrap();
        assert_eq!(form.empresa_id, 0);

        let form = apply_input(&form, &FIELDS[2], "4").unwrap();
        assert_eq!(form.unidad_id, Some(4));
        let form = apply_input(&form, &FIELDS[2], "").unwrap();
        assert_eq!(form.unidad_id, None);

        let form = apply_input(&form, &FIELDS[3], "2,5").unwrap();
        assert_eq!(form.precio, 2.5);

        let form = apply_input(&form, &FIELDS[4], "").unwrap();
        assert_eq!(form.fecha_fin, None);
        let form = apply_input(&form, &FIELDS[5], "").unwrap();
        assert_eq!(form.fecha_inicio, "");

        let form = apply_input(&form, &FIELDS[6], "true").unwrap();
        assert!(form.activo);
    }

    #[test]
    fn test_apply_input_rejects_garbage_number() {
        let err = apply_input(&Form::default(), &FIELDS[1], "abc").unwrap_err();
        assert_eq!(err, "Valor numérico inválido");
    }

    #[test]
    fn test_parse_decimal_accepts_comma() {
        assert_eq!(parse_decimal("2,5"), Ok(2.5));
        assert_eq!(parse_decimal(" 10 "), Ok(10.0));
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("dos").is_err());
    }

    #[test]
    fn test_field_text() {
        let form = Form {
            empresa_id: 12,
            precio: 2.5,
            activo: true,
            ..Form::default()
        };
        assert_eq!(field_text(&form, "empresaId"), "12");
        assert_eq!(field_text(&form, "precio"), "2.5");
        assert_eq!(field_text(&form, "unidadId"), "");
        assert_eq!(field_text(&form, "activo"), "true");
        assert_eq!(field_text(&form, "inexistente"), "");
        assert_eq!(value_text(&json!(3.0)), "3");
    }
}
