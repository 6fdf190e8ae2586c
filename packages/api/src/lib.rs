//! # API crate: the sign-in form's view of the backend
//!
//! The form talks to exactly one endpoint: `POST /api/verify` with a JSON body
//! `{ "phone": ..., "code": ... }`. Any 2xx status means the code was accepted;
//! the response body is never read.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`verify`] | [`Verifier`] seam, the reqwest-backed [`HttpVerifier`] and [`VerifyError`] |
//!
//! Sending the code itself is owned by the backend and is not modelled here.

pub mod verify;

pub use signin::Credentials;
pub use verify::{HttpVerifier, Verifier, VerifyError};
