pub mod aggregate;
mod metadata;

pub use aggregate::{
    filter_accounts, CuentaPorCobrar, CuentaPorCobrarRequest, ReceivableFilter, ReceivableStatus,
};
pub use metadata::{ENTITY_METADATA, FIELDS};
