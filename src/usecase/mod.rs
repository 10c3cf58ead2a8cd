//! Usecase layer: loading the typed tree and rendering it to a document.

pub mod build;
pub mod convert;
pub mod document;
pub mod extract;
pub mod load;
pub mod options;
pub mod render;
pub mod select;
pub mod stats;
