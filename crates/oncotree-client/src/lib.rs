//! Providers for OncoTree version catalogs and taxonomy snapshots.
//!
//! The [`TaxonomyProvider`] trait abstracts over where taxonomy data comes
//! from. [`HttpProvider`] talks to the OncoTree REST API; [`LocalProvider`]
//! reads the same JSON documents from a directory, for offline runs and
//! tests.
//!
//! Every failure here is fatal to a translation run: there is no retry.

pub mod error;
pub mod http;
pub mod local;
pub mod provider;
pub mod wire;

pub use error::{ClientError, Result};
pub use http::{HttpProvider, DEFAULT_BASE_URL};
pub use local::LocalProvider;
pub use provider::{load_run_data, RunData, TaxonomyProvider};
