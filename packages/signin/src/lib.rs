//! Framework-free logic behind the phone sign-in form.
//!
//! The UI crate renders whatever [`PhoneAuthState`] derives; nothing in here
//! knows about Dioxus, the DOM or the network.

pub mod code;
pub mod config;
pub mod content;
pub mod form;
pub mod phone;

pub use code::{OneTimeCode, CODE_LENGTH};
pub use config::FormConfig;
pub use content::{content, Content, Language};
pub use form::{Credentials, FocusRequest, FocusTarget, Phase, PhoneAuthState, PhoneValidationError};
pub use phone::{flag_glyph, LibPhoneNumber, ParsedPhone, PhoneNumbers};
