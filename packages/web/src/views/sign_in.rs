//! Sign-in page: language picker and the phone sign-in form.

use dioxus::prelude::*;
use signin::{Credentials, FormConfig};
use ui::{LanguageSelector, PhoneAuthForm};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let config = use_context::<FormConfig>();
    let nav = use_navigator();
    let default_language = config.ui.default_language;
    let language = use_signal(move || default_language);

    rsx! {
        div {
            class: "page",

            div {
                class: "page__header",
                LanguageSelector { language }
            }

            PhoneAuthForm {
                language: language(),
                config,
                on_verified: move |_: Credentials| {
                    tracing::info!("Phone sign-in verified");
                    nav.push(Route::Welcome {});
                },
            }
        }
    }
}
