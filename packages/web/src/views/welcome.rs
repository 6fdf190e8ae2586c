use dioxus::prelude::*;

/// Landing page after a successful verification. Session handling belongs to
/// the backend; this only confirms the hand-off.
#[component]
pub fn Welcome() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { "Welcome" }
            p { "You are signed in." }
        }
    }
}
