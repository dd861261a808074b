//! Word document output for sumdoc.
//!
//! [`render_docx`] turns a title and a summary into `.docx` bytes;
//! [`FsDocumentStore`] implements the
//! [`DocumentStore`](sumdoc_core::DocumentStore) port on top of it, keeping
//! every document as a flat file in one output directory.

#![deny(unsafe_code)]

mod render;
mod store;

pub use render::{DOCX_MIME_TYPE, HEADING_STYLE_ID, render_docx};
pub use store::FsDocumentStore;
