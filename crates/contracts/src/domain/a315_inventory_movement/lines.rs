//! Estado y líneas de un movimiento de inventario
//!
//! El backend valida las transiciones; aquí sólo se decide qué acciones
//! ofrecer y se calculan los totales del formulario.

use serde::{Deserialize, Serialize};

use crate::domain::a311_product::Producto;
use crate::domain::a316_movement_line::{DetalleMovimientoRequest, FIELDS as LINE_FIELDS};
use crate::shared::metadata::validate_form;

pub const EMPTY_LINES_MESSAGE: &str = "Debe agregar al menos un detalle al movimiento.";
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementState {
    #[default]
    Borrador,
    Confirmado,
    Contabilizado,
    Anulado,
}

impl MovementState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Borrador => "BORRADOR",
            Self::Confirmado => "CONFIRMADO",
            Self::Contabilizado => "CONTABILIZADO",
            Self::Anulado => "ANULADO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Borrador => "Borrador",
            Self::Confirmado => "Confirmado",
            Self::Contabilizado => "Contabilizado",
            Self::Anulado => "Anulado",
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, Self::Borrador)
    }

    /// Transiciones que la interfaz ofrece desde este estado
    pub fn actions(&self) -> &'static [MovementAction] {
        match self {
            Self::Borrador => &[MovementAction::Confirmar, MovementAction::Anular],
            Self::Confirmado => &[MovementAction::Contabilizar, MovementAction::Anular],
            Self::Contabilizado => &[MovementAction::Anular],
            Self::Anulado => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementAction {
    Confirmar,
    Contabilizar,
    Anular,
}

impl MovementAction {
    /// Sufijo del endpoint `PUT /{id}/<accion>`
    pub fn path(&self) -> &'static str {
        match self {
            Self::Confirmar => "confirmar",
            Self::Contabilizar => "contabilizar",
            Self::Anular => "anular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmar => "Confirmar",
            Self::Contabilizar => "Contabilizar",
            Self::Anular => "Anular",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Confirmar => "Movimiento confirmado exitosamente",
            Self::Contabilizar => "Movimiento contabilizado exitosamente",
            Self::Anular => "Movimiento anulado exitosamente",
        }
    }

    pub fn error_title(&self) -> &'static str {
        match self {
            Self::Confirmar => "Error al confirmar",
            Self::Contabilizar => "Error al contabilizar",
            Self::Anular => "Error al anular",
        }
    }
}

/// Líneas editables de un movimiento, en orden
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementLines(Vec<DetalleMovimientoRequest>);

impl MovementLines {
    /// Formulario nuevo: una línea en blanco
    pub fn draft() -> Self {
        Self(vec![DetalleMovimientoRequest::default()])
    }

    pub fn add_line(&mut self) {
        self.0.push(DetalleMovimientoRequest::default());
    }

    /// Índices fuera de rango se ignoran
    pub fn remove_line(&mut self, index: usize) {
        if index < self.0.len() {
            self.0.remove(index);
        }
    }

    pub fn set_line(&mut self, index: usize, line: DetalleMovimientoRequest) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = line;
        }
    }

    pub fn get(&self, index: usize) -> Option<&DetalleMovimientoRequest> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DetalleMovimientoRequest> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Σ cantidad × costo unitario
    pub fn total(&self) -> f64 {
        self.0.iter().map(DetalleMovimientoRequest::line_total).sum()
    }

    /// Índices de las líneas que no pasan las reglas por campo
    pub fn invalid_lines(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, line)| !validate_form(*line, LINE_FIELDS).is_empty())
            .map(|(i, _)| i)
            .collect()
    }
}

impl FromIterator<DetalleMovimientoRequest> for MovementLines {
    fn from_iter<I: IntoIterator<Item = DetalleMovimientoRequest>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Nombre del producto de una línea
pub fn product_name(productos: &[Producto], producto_id: i64) -> String {
    productos
        .iter()
        .find(|p| p.id == producto_id)
        .map(|p| p.producto_nombre.clone())
        .unwrap_or_else(|| PRODUCT_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cantidad: f64, costo_unitario: f64) -> DetalleMovimientoRequest {
        DetalleMovimientoRequest {
            producto_id: 1,
            cantidad,
            costo_unitario,
            ..DetalleMovimientoRequest::default()
        }
    }

    #[test]
    fn test_add_then_remove_last_is_identity() {
        let mut lines: MovementLines = vec![line(2.0, 3.0), line(1.0, 4.5)].into_iter().collect();
        let before = lines.clone();
        lines.add_line();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(2).map(|l| l.cantidad), Some(1.0));
        lines.remove_line(lines.len() - 1);
        assert_eq!(lines, before);
    }

    #[test]
    fn test_totals() {
        let lines: MovementLines = vec![line(10.0, 2.5)].into_iter().collect();
        assert_eq!(lines.total(), 25.0);

        let lines: MovementLines = vec![line(2.0, 3.0), line(1.0, 4.5)].into_iter().collect();
        assert_eq!(lines.total(), 10.5);
        assert_eq!(MovementLines::default().total(), 0.0);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut lines = MovementLines::draft();
        lines.remove_line(5);
        assert_eq!(lines.len(), 1);
        lines.remove_line(0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_set_line_and_invalid_lines() {
        let mut lines = MovementLines::draft();
        lines.add_line();
        assert_eq!(lines.invalid_lines(), vec![0, 1]);
        lines.set_line(1, line(3.0, 1.0));
        assert_eq!(lines.invalid_lines(), vec![0]);
        lines.set_line(0, line(0.0, 1.0));
        // cantidad por debajo del mínimo
        assert_eq!(lines.invalid_lines(), vec![0]);
    }

    #[test]
    fn test_state_actions() {
        assert_eq!(
            MovementState::Borrador.actions(),
            &[MovementAction::Confirmar, MovementAction::Anular]
        );
        assert_eq!(
            MovementState::Confirmado.actions(),
            &[MovementAction::Contabilizar, MovementAction::Anular]
        );
        assert!(MovementState::Anulado.actions().is_empty());
        assert_eq!(MovementState::default(), MovementState::Borrador);
        assert_eq!(MovementAction::Contabilizar.path(), "contabilizar");
        assert_eq!(
            MovementAction::Anular.success_message(),
            "Movimiento anulado exitosamente"
        );
    }

    #[test]
    fn test_state_wire_format() {
        let state: MovementState = serde_json::from_str("\"CONTABILIZADO\"").unwrap();
        assert_eq!(state, MovementState::Contabilizado);
        assert_eq!(state.label(), "Contabilizado");
        assert_eq!(serde_json::to_string(&MovementState::Borrador).unwrap(), "\"BORRADOR\"");
    }

    #[test]
    fn test_product_name() {
        let productos = vec![Producto {
            id: 3,
            producto_nombre: "Harina".into(),
            ..Producto::default()
        }];
        assert_eq!(product_name(&productos, 3), "Harina");
        assert_eq!(product_name(&productos, 4), PRODUCT_NOT_FOUND);
    }
}
