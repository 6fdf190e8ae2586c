use dioxus::prelude::*;
use signin::{content, Language};

#[component]
pub fn PrivacyNotice(language: Language, url: String) -> Element {
    let privacy = &content(language).privacy;

    rsx! {
        p {
            class: "phone-auth__privacy",
            "{privacy.prefix} "
            a { href: url, "{privacy.label}" }
        }
    }
}
