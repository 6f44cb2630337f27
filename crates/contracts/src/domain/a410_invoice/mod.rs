pub mod aggregate;
mod metadata;
pub mod state;

pub use aggregate::{filter_by_state, invoice_total, Factura, FacturaRequest, DUE_DATE_MESSAGE};
pub use metadata::{ENTITY_METADATA, FIELDS};
pub use state::{AutorizacionSriRequest, InvoiceAction, InvoiceState, PagoRequest};
