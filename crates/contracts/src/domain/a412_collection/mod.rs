pub mod aggregate;
mod metadata;
pub mod state;

pub use aggregate::{filter_by_state, Cobro, CobroRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
pub use state::{
    AnulacionRequest, CollectionAction, CollectionState, ALREADY_VOID, NOT_PENDING_CONFIRM,
    NOT_PENDING_EDIT, VOID_REASON_PROMPT,
};
