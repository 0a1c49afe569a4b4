//! Core types and the client-side synchronisation layer for Holocron.
//!
//! This crate is deliberately free of HTTP and terminal dependencies. The
//! network transport is abstracted behind [`source::FilmSource`]; renderers
//! consume [`browser::Browser`].

pub mod browser;
pub mod collection;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod film;
pub mod project;
pub mod source;
pub mod status;

pub use error::{Error, LastError, Result};
pub use film::{Film, FilmId, FilmRecord};
pub use source::FilmSource;
pub use status::FetchStatus;
