//! The phone sign-in form: phone number, one-time code and submit.

use api::{Credentials, HttpVerifier, Verifier, VerifyError};
use dioxus::prelude::*;
use signin::{FormConfig, Language, PhoneAuthState};

use crate::{use_focus_handles, CodeGrid, PhoneField, PrivacyNotice, SubmitButton};

/// Origin of the page the form runs in, if there is a page.
fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Client for the configured verification endpoint, resolved against the
/// page origin.
fn verifier_for(config: &FormConfig) -> HttpVerifier {
    HttpVerifier::new(config.verify_url(page_origin().as_deref()))
}

/// Phone number + one-time code sign-in form.
///
/// `language` selects the strings; changing it re-labels the form without
/// touching what was typed. `on_verified` fires with the submitted
/// credentials once the backend accepts the code.
#[component]
pub fn PhoneAuthForm(
    language: Language,
    #[props(default)] config: FormConfig,
    #[props(default)] on_verified: EventHandler<Credentials>,
) -> Element {
    let delay = config.submit_focus_delay();
    let mut state = use_signal(move || PhoneAuthState::new(language, delay));
    let focus = use_focus_handles();

    let verifier = use_hook(|| verifier_for(&config));

    use_effect(use_reactive!(|language| {
        if state.peek().language() != language {
            state.write().set_language(language);
        }
    }));

    let submit = move |_: ()| {
        let Some(credentials) = state.write().begin_submit() else {
            return;
        };
        tracing::debug!(phase = %state.peek().phase(), "submitting code");
        let verifier = verifier.clone();
        spawn(async move {
            let outcome = verifier.verify(&credentials).await;
            if let Err(VerifyError::Network(e)) = &outcome {
                tracing::error!("Verification request to {} failed: {}", verifier.url(), e);
            }
            if state.write().finish_submit(outcome) {
                on_verified.call(credentials);
            }
        });
    };

    let phase = state.read().phase();

    rsx! {
        form {
            class: "phone-auth",
            "data-phase": "{phase}",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),

            PhoneField { state, focus }
            CodeGrid { state, focus }
            SubmitButton { state, focus, onsubmit: submit }
            PrivacyNotice { language, url: config.ui.privacy_url.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_english_form() {
        let html = render(|| rsx! { PhoneAuthForm { language: Language::En } });

        assert!(html.contains("Phone number"));
        assert!(html.contains("+45 60 55 07 09"));
        assert!(html.contains("Sign in"));
        assert!(html.contains("🌍"));
        assert!(html.contains("phone-auth-code-5"));
        assert!(!html.contains("phone-auth-code-6"));
        assert!(html.contains("data-phase=\"empty\""));
    }

    #[test]
    fn test_verifier_targets_configured_endpoint() {
        let verifier = verifier_for(&FormConfig::default());
        assert_eq!(verifier.url(), "http://localhost:8080/api/verify");

        let config = FormConfig::default().with_endpoint("https://auth.example.com/verify");
        assert_eq!(verifier_for(&config).url(), "https://auth.example.com/verify");
    }

    #[test]
    fn test_renders_danish_form() {
        let html = render(|| rsx! { PhoneAuthForm { language: Language::Da } });

        assert!(html.contains("Telefonnummer"));
        assert!(html.contains("Log ind"));
        assert!(html.contains("privatlivspolitik"));
    }
}
