pub mod aggregate;
mod metadata;

pub use aggregate::{
    invoice_lines_total, line_amounts, DetalleFactura, DetalleFacturaRequest, LineAmounts,
};
pub use metadata::{ENTITY_METADATA, FIELDS};
