use dioxus::prelude::*;
use signin::{FocusTarget, PhoneAuthState};

use crate::FocusHandles;

/// Sign-in button, enabled once the phone number is valid and the code is
/// complete, with the verification error underneath.
#[component]
pub fn SubmitButton(
    state: Signal<PhoneAuthState>,
    mut focus: FocusHandles,
    onsubmit: EventHandler<()>,
) -> Element {
    let (content, enabled, submitting, error) = {
        let form = state.read();
        (
            form.content(),
            form.can_submit(),
            form.is_submitting(),
            form.auth_error(),
        )
    };
    let class = if enabled {
        "phone-auth__submit phone-auth__submit--ready"
    } else {
        "phone-auth__submit"
    };

    rsx! {
        div {
            class: "phone-auth__section",

            button {
                class: class,
                r#type: "submit",
                disabled: !enabled,
                "aria-busy": submitting,
                onmounted: move |evt: MountedEvent| focus.register(FocusTarget::Submit, evt.data()),
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    onsubmit.call(());
                },
                "{content.btn.label}"
            }

            if let Some(message) = error {
                p { class: "phone-auth__error", "{message}" }
            }
        }
    }
}
