//! This crate contains the shared sign-in UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod focus;
pub use focus::{use_focus_handles, FocusHandles};

mod phone_field;
pub use phone_field::PhoneField;

mod code_grid;
pub use code_grid::CodeGrid;

mod submit_button;
pub use submit_button::SubmitButton;

mod language_selector;
pub use language_selector::LanguageSelector;

mod privacy_notice;
pub use privacy_notice::PrivacyNotice;

mod phone_auth_form;
pub use phone_auth_form::PhoneAuthForm;
