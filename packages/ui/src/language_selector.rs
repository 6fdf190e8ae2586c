use dioxus::prelude::*;
use signin::Language;

/// Drop-down that switches the language of the forms on the page.
#[component]
pub fn LanguageSelector(mut language: Signal<Language>) -> Element {
    let current = language();

    rsx! {
        select {
            class: "language-selector",
            "aria-label": "Language",
            value: current.code(),
            onchange: move |evt: FormEvent| match evt.value().parse::<Language>() {
                Ok(selected) => language.set(selected),
                Err(e) => tracing::warn!("{e}"),
            },
            for option_language in Language::ALL {
                option {
                    key: "{option_language.code()}",
                    value: option_language.code(),
                    selected: option_language == current,
                    "{option_language.label()}"
                }
            }
        }
    }
}
