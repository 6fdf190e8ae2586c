//! One-time code entry: one single-character cell per digit and a reset button.

use dioxus::prelude::*;
use signin::{FocusTarget, PhoneAuthState, CODE_LENGTH};

use crate::FocusHandles;

fn cell_class(cell: usize) -> &'static str {
    match cell {
        0 => "phone-auth__cell phone-auth__cell--first",
        c if c == CODE_LENGTH - 1 => "phone-auth__cell phone-auth__cell--last",
        _ => "phone-auth__cell",
    }
}

#[component]
pub fn CodeGrid(mut state: Signal<PhoneAuthState>, mut focus: FocusHandles) -> Element {
    let (content, cells, can_reset) = {
        let form = state.read();
        let cells: Vec<String> = (0..CODE_LENGTH).map(|cell| form.code_cell(cell)).collect();
        (form.content(), cells, form.can_reset())
    };
    let reset_class = if can_reset {
        "phone-auth__reset phone-auth__reset--active"
    } else {
        "phone-auth__reset"
    };

    rsx! {
        div {
            class: "phone-auth__section",

            label {
                class: "phone-auth__label",
                r#for: "phone-auth-code-0",
                "{content.code.label}"
                span { class: "phone-auth__description", "{content.code.description}" }
            }

            div {
                class: "phone-auth__row",

                for (idx, value) in cells.into_iter().enumerate() {
                    input {
                        key: "{idx}",
                        id: "phone-auth-code-{idx}",
                        class: cell_class(idx),
                        maxlength: "1",
                        inputmode: "numeric",
                        autocomplete: "one-time-code",
                        placeholder: content.code.placeholder,
                        value: value,
                        onmounted: move |evt: MountedEvent| {
                            focus.register(FocusTarget::CodeCell(idx), evt.data())
                        },
                        oninput: move |evt: FormEvent| {
                            let request = state.write().input_code(idx, &evt.value());
                            if let Some(request) = request {
                                focus.request(request);
                            }
                        },
                    }
                }

                button {
                    class: reset_class,
                    r#type: "button",
                    disabled: !can_reset,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let request = state.write().reset_code();
                        if let Some(request) = request {
                            focus.request(request);
                        }
                    },
                    "{content.code.reset}"
                }
            }
        }
    }
}
