//! Field kind enumeration for metadata system

/// Kind of form control a field is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    Email,
    Integer,
    Decimal,
    Date,
    DateTime,
    Bool,
    /// Reference to another entity by id; options are loaded with the rows
    Ref,
    /// Closed list of `(value, label)` pairs
    Choice(&'static [(&'static str, &'static str)]),
}

impl FieldKind {
    /// HTML `type` attribute of the input rendered for this kind
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Integer | Self::Decimal => "number",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
            Self::Bool => "checkbox",
            Self::Text | Self::TextArea | Self::Ref | Self::Choice(_) => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal | Self::Ref)
    }

    /// Step attribute for number inputs
    pub fn step(&self) -> Option<&'static str> {
        match self {
            Self::Integer => Some("1"),
            Self::Decimal => Some("0.01"),
            _ => None,
        }
    }

    pub fn choice_label(&self, value: &str) -> Option<&'static str> {
        match self {
            Self::Choice(choices) => choices
                .iter()
                .find(|(v, _)| *v == value)
                .map(|(_, label)| *label),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPERATURAS: &[(&str, &str)] = &[("AMBIENTE", "Ambiente"), ("CONGELADO", "Congelado")];

    #[test]
    fn test_input_type() {
        assert_eq!(FieldKind::default().input_type(), "text");
        assert_eq!(FieldKind::Decimal.input_type(), "number");
        assert_eq!(FieldKind::DateTime.input_type(), "datetime-local");
        assert_eq!(FieldKind::Choice(TEMPERATURAS).input_type(), "text");
    }

    #[test]
    fn test_choice_label() {
        let kind = FieldKind::Choice(TEMPERATURAS);
        assert_eq!(kind.choice_label("CONGELADO"), Some("Congelado"));
        assert_eq!(kind.choice_label("OTRO"), None);
        assert_eq!(FieldKind::Text.choice_label("AMBIENTE"), None);
    }
}
