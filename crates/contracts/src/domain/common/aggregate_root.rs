use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::metadata::{DeletePrompt, EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

/// Raíz de agregado
///
/// Registro tal como lo devuelve el backend, junto con el tipo de petición
/// que se envía al crear o actualizar. Las filas "detalle" también lo
/// implementan para poder editarse desde su pantalla.
pub trait AggregateRoot: Searchable + Clone + Send + Sync + 'static {
    /// Cuerpo de POST/PUT, sin `id` ni campos de presentación
    type Request: Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    // ============================================================================
    // Datos de la instancia
    // ============================================================================

    fn id(&self) -> Option<i64>;

    /// Formulario de edición precargado con los datos de la fila
    fn to_request(&self) -> Self::Request;

    /// Texto con el que se nombra la fila en diálogos
    fn display_name(&self) -> String;

    // ============================================================================
    // Metadatos de la clase
    // ============================================================================

    fn entity_metadata_info() -> EntityMetadataInfo;

    fn field_metadata() -> &'static [FieldMetadata];

    // ============================================================================
    // Reglas del formulario
    // ============================================================================

    /// Recalcula los campos derivados tras cada cambio del formulario
    fn recompute(_request: &mut Self::Request) {}

    /// Validaciones que cruzan campos, se ejecutan después de las reglas por campo
    fn check(_request: &Self::Request) -> Result<(), FormWarning> {
        Ok(())
    }

    /// Motivo por el que la fila no se puede editar
    fn edit_guard(&self) -> Result<(), &'static str> {
        Ok(())
    }

    fn delete_prompt(&self) -> DeletePrompt {
        DeletePrompt::Item(self.display_name())
    }
}
