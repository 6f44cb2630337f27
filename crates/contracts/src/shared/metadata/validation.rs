//! Validation rules for form fields

use serde_json::Value;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            email: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_len(self, len: usize) -> Self {
        Self {
            min_length: Some(len),
            ..self
        }
    }

    pub const fn max_len(self, len: usize) -> Self {
        Self {
            max_length: Some(len),
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    pub const fn email(self) -> Self {
        Self {
            email: true,
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    ///
    /// Longitud y formato se revisan solo en valores no vacíos.
    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return if self.required {
                Err("Este campo es requerido".to_string())
            } else {
                Ok(())
            };
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("Debe tener al menos {} caracteres", min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("Debe tener máximo {} caracteres", max));
            }
        }

        if self.email && !is_valid_email(value) {
            return Err("Email inválido".to_string());
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("Debe ser mayor o igual a {}", min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("Debe ser menor o igual a {}", max));
            }
        }

        Ok(())
    }

    /// Validate a JSON value taken from a serialized form
    pub fn validate_value(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null => {
                if self.required {
                    Err("Este campo es requerido".to_string())
                } else {
                    Ok(())
                }
            }
            Value::String(s) => self.validate_string(s),
            Value::Number(n) => self.validate_number(n.as_f64().unwrap_or_default()),
            Value::Array(items) if self.required && items.is_empty() => {
                Err("Este campo es requerido".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Loose e-mail check: `local@domain`, no whitespace, no empty domain labels
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .split('.')
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   "),
            Err("Este campo es requerido".to_string())
        );
        assert!(rules.validate_string("Acme").is_ok());
    }

    #[test]
    fn test_length_bounds() {
        let rules = ValidationRules::required().min_len(3).max_len(5);
        assert_eq!(
            rules.validate_string("ab"),
            Err("Debe tener al menos 3 caracteres".to_string())
        );
        assert_eq!(
            rules.validate_string("abcdef"),
            Err("Debe tener máximo 5 caracteres".to_string())
        );
        // la longitud se cuenta en caracteres, no en bytes
        assert!(rules.validate_string("ñandú").is_ok());
    }

    #[test]
    fn test_optional_empty_skips_other_rules() {
        let rules = ValidationRules::none().min_len(10).email();
        assert!(rules.validate_string("").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@acme.com"));
        assert!(is_valid_email("ventas@localhost"));
        assert!(!is_valid_email("acme.com"));
        assert!(!is_valid_email("a@@acme.com"));
        assert!(!is_valid_email("a b@acme.com"));
        assert!(!is_valid_email("a@acme..com"));

        let rules = ValidationRules::required().email();
        assert_eq!(
            rules.validate_string("no-es-email"),
            Err("Email inválido".to_string())
        );
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::required().min(0.01);
        assert_eq!(
            rules.validate_number(0.0),
            Err("Debe ser mayor o igual a 0.01".to_string())
        );
        assert!(rules.validate_number(0.01).is_ok());

        let rules = ValidationRules::none().min(0.0).max(100.0);
        assert_eq!(
            rules.validate_number(-1.0),
            Err("Debe ser mayor o igual a 0".to_string())
        );
        assert_eq!(
            rules.validate_number(101.0),
            Err("Debe ser menor o igual a 100".to_string())
        );
    }

    #[test]
    fn test_validate_value() {
        let rules = ValidationRules::required();
        assert!(rules.validate_value(&Value::Null).is_err());
        assert!(rules.validate_value(&json!(0)).is_ok());
        assert!(rules.validate_value(&json!([])).is_err());
        assert!(rules.validate_value(&json!(true)).is_ok());
        assert!(ValidationRules::none().validate_value(&Value::Null).is_ok());
    }
}
