//! Probes over the legacy Vite project: fixed paths, entry document
//! metadata, and root component detection

pub mod component;
pub mod layout;
pub mod metadata;

pub use component::{
    relative_import, resolve_candidate, resolve_component, CandidateTable, COMPONENT_CANDIDATES,
    STYLESHEET_CANDIDATES,
};
pub use metadata::Metadata;
