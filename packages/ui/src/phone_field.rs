//! Phone number input with country flag, validity check mark and the
//! "send code" button.

use dioxus::prelude::*;
use signin::{FocusTarget, PhoneAuthState};

use crate::icons::FaCircleCheck;
use crate::{FocusHandles, Icon};

#[component]
pub fn PhoneField(mut state: Signal<PhoneAuthState>, mut focus: FocusHandles) -> Element {
    let (content, display, prefix, valid, error) = {
        let form = state.read();
        (
            form.content(),
            form.display_phone(),
            form.country_prefix(),
            form.shows_checkmark(),
            form.phone_error(),
        )
    };
    let group_class = if error.is_some() {
        "phone-auth__input-group phone-auth__input-group--error"
    } else {
        "phone-auth__input-group"
    };

    rsx! {
        div {
            class: "phone-auth__section",

            label {
                class: "phone-auth__label",
                r#for: "phone-auth-phone",
                "{content.phone.label}"
                span { class: "phone-auth__description", "{content.phone.description}" }
            }

            div {
                class: "phone-auth__row",

                div {
                    class: group_class,

                    span { class: "phone-auth__prefix", "{prefix}" }

                    input {
                        id: "phone-auth-phone",
                        class: "phone-auth__input",
                        r#type: "tel",
                        autocomplete: "tel",
                        placeholder: content.phone.placeholder,
                        value: display,
                        onmounted: move |evt: MountedEvent| focus.register(FocusTarget::Phone, evt.data()),
                        onfocus: move |_| state.write().focus_phone(),
                        onblur: move |_| state.write().blur_phone(),
                        oninput: move |evt: FormEvent| {
                            let request = state.write().input_phone(&evt.value());
                            if let Some(request) = request {
                                focus.request(request);
                            }
                        },
                    }

                    if valid {
                        span {
                            class: "phone-auth__suffix phone-auth__suffix--valid",
                            Icon { icon: FaCircleCheck, width: 16, height: 16 }
                        }
                    }
                }

                button {
                    class: "phone-auth__send",
                    r#type: "button",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let requested = state.write().send_code();
                        // A refusal is flagged on the field by the state.
                        if let Ok(request) = requested {
                            focus.request(request);
                        }
                    },
                    "{content.phone.btn.send}"
                    span { class: "phone-auth__send-detail", " {content.phone.btn.code}" }
                }
            }

            if let Some(message) = error {
                p { class: "phone-auth__error", "{message}" }
            }
        }
    }
}
