//! Mounted element handles for moving input focus between form controls.

use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use signin::{FocusRequest, FocusTarget, CODE_LENGTH};

/// Elements of one form that can receive focus, plus the pending deferred
/// focus task if there is one.
#[derive(Clone, Copy, PartialEq)]
pub struct FocusHandles {
    phone: Signal<Option<Rc<MountedData>>>,
    cells: Signal<[Option<Rc<MountedData>>; CODE_LENGTH]>,
    submit: Signal<Option<Rc<MountedData>>>,
    pending: Signal<Option<Task>>,
}

/// Create the focus handles for a form. A deferred focus still waiting when
/// the form unmounts is cancelled.
pub fn use_focus_handles() -> FocusHandles {
    let handles = FocusHandles {
        phone: use_signal(|| None),
        cells: use_signal(Default::default),
        submit: use_signal(|| None),
        pending: use_signal(|| None),
    };

    use_drop(move || {
        let mut pending = handles.pending;
        if let Ok(mut pending) = pending.try_write() {
            if let Some(task) = pending.take() {
                task.cancel();
            }
        };
    });

    handles
}

impl FocusHandles {
    /// Remember the element behind `target`; call from `onmounted`.
    pub fn register(&mut self, target: FocusTarget, element: Rc<MountedData>) {
        match target {
            FocusTarget::Phone => self.phone.set(Some(element)),
            FocusTarget::CodeCell(cell) if cell < CODE_LENGTH => {
                self.cells.write()[cell] = Some(element);
            }
            FocusTarget::CodeCell(cell) => {
                tracing::warn!("no code cell {cell} to register");
            }
            FocusTarget::Submit => self.submit.set(Some(element)),
        }
    }

    fn element(&self, target: FocusTarget) -> Option<Rc<MountedData>> {
        match target {
            FocusTarget::Phone => self.phone.read().clone(),
            FocusTarget::CodeCell(cell) => self.cells.read().get(cell).cloned().flatten(),
            FocusTarget::Submit => self.submit.read().clone(),
        }
    }

    /// Whether a deferred focus is still waiting to fire.
    pub fn has_pending(&self) -> bool {
        self.pending.peek().is_some()
    }

    /// Carry out a focus request. A newer request replaces a deferred one
    /// that has not fired yet.
    pub fn request(&mut self, request: FocusRequest) {
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }

        match request {
            FocusRequest::Now(target) => {
                if let Some(element) = self.element(target) {
                    spawn(focus(element, target));
                }
            }
            FocusRequest::After(delay, target) => {
                let mut handles = *self;
                let task = spawn(async move {
                    sleep(delay).await;
                    handles.pending.set(None);
                    if let Some(element) = handles.element(target) {
                        focus(element, target).await;
                    }
                });
                self.pending.set(Some(task));
            }
        }
    }
}

async fn focus(element: Rc<MountedData>, target: FocusTarget) {
    if let Err(e) = element.set_focus(true).await {
        tracing::debug!(?target, error = ?e, "could not move focus");
    }
}

async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const DELAY: Duration = Duration::from_millis(5);

    thread_local! {
        static HANDLES: Cell<Option<FocusHandles>> = const { Cell::new(None) };
        static STEPS: Cell<(bool, bool)> = const { Cell::new((false, false)) };
    }

    fn captured() -> FocusHandles {
        HANDLES.with(|handles| handles.get()).unwrap()
    }

    /// Issues a deferred focus on first render.
    #[component]
    fn Deferred() -> Element {
        let mut focus = use_focus_handles();
        use_hook(move || focus.request(FocusRequest::After(DELAY, FocusTarget::Submit)));
        HANDLES.with(|handles| handles.set(Some(focus)));
        rsx! { span { "deferred" } }
    }

    /// Issues a deferred focus, then an immediate one, on first render.
    #[component]
    fn Replaced() -> Element {
        let mut focus = use_focus_handles();
        use_hook(move || {
            focus.request(FocusRequest::After(DELAY, FocusTarget::Submit));
            let after_deferred = focus.has_pending();
            focus.request(FocusRequest::Now(FocusTarget::Phone));
            STEPS.with(|steps| steps.set((after_deferred, focus.has_pending())));
        });
        rsx! { span { "replaced" } }
    }

    /// Shows a `Deferred` child, then unmounts it from a task.
    #[component]
    fn Unmounting() -> Element {
        let mut show = use_signal(|| true);
        use_hook(move || {
            spawn(async move { show.set(false) });
        });
        rsx! {
            if show() {
                Deferred {}
            }
        }
    }

    async fn settle(dom: &mut VirtualDom) {
        // Time out rather than wait for a render that never comes.
        let _ = tokio::time::timeout(DELAY * 10, dom.wait_for_work()).await;
    }

    #[tokio::test]
    async fn test_deferred_request_is_pending_until_it_fires() {
        let mut dom = VirtualDom::new(Deferred);
        dom.rebuild_in_place();
        assert!(captured().has_pending());

        settle(&mut dom).await;
        assert!(!captured().has_pending());
    }

    #[tokio::test]
    async fn test_newer_request_cancels_deferred_one() {
        let mut dom = VirtualDom::new(Replaced);
        dom.rebuild_in_place();

        assert_eq!(STEPS.with(|steps| steps.get()), (true, false));
        settle(&mut dom).await;
    }

    #[tokio::test]
    async fn test_unmount_cancels_deferred_request() {
        let mut dom = VirtualDom::new(Unmounting);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("deferred"));

        dom.wait_for_work().await;
        dom.render_immediate_to_vec();
        assert!(!dioxus_ssr::render(&dom).contains("deferred"));

        // A deferred task that outlived the unmount would write to the
        // dropped handles once the delay is over.
        settle(&mut dom).await;
        tokio::time::sleep(DELAY * 2).await;
        settle(&mut dom).await;
    }
}
