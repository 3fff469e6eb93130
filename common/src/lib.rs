//! Shared, DOM-free core of the ads report viewer.
//!
//! Everything the browser app needs to decide *what* to show lives here so it
//! can be unit tested natively: the wire types, the controller state machine,
//! the table sort engine, the pagination model and the rows-to-HTML builder.
//! The `frontend` crate only adapts these to Yew and `web-sys`.

pub mod controller;
pub mod dates;
pub mod error;
pub mod model;
pub mod pagination;
pub mod render;
pub mod requests;
pub mod sort;
