use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use wasm_bindgen_futures::spawn_local;

use crate::services::logging::Logger;
use crate::state::{ModalView, OpenShiftFormState};

pub type OpenShiftFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Async callback that performs the actual shift opening.
///
/// Two handlers are equal only if they share the same closure, so a parent
/// that keeps its handler in a hook won't force the modal to re-render.
#[derive(Clone)]
pub struct OpenShiftHandler(Rc<dyn Fn(f64) -> OpenShiftFuture>);

impl OpenShiftHandler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(f64) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        Self(Rc::new(move |amount| Box::pin(f(amount))))
    }

    pub fn call(&self, amount: f64) -> OpenShiftFuture {
        (self.0)(amount)
    }
}

impl PartialEq for OpenShiftHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct OpenShiftModalProps {
    /// Render the dialog at all
    pub show: bool,
    /// A shift is already active on this register
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_open_shift: OpenShiftHandler,
}

#[function_component(OpenShiftModal)]
pub fn open_shift_modal(props: &OpenShiftModalProps) -> Html {
    let form = use_state(OpenShiftFormState::new);

    // Reset state when modal opens, unless a submission is still pending
    use_effect_with(props.show, {
        let form = form.clone();
        move |show| {
            if *show {
                form.set(form.reopened());
            }
            || ()
        }
    });

    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with_amount(input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_open_shift = props.on_open_shift.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (next, amount) = form.submit();
            let submitted_input = next.amount_input.clone();
            form.set(next);

            let Some(amount) = amount else {
                return;
            };

            let form = form.clone();
            let on_open_shift = on_open_shift.clone();
            spawn_local(async move {
                let result = on_open_shift.call(amount).await;
                match &result {
                    Ok(()) => Logger::info_with_component(
                        "open_shift_modal",
                        &format!("Shift opened with {}", shared::format_currency(amount)),
                    ),
                    Err(e) => Logger::warn_with_component(
                        "open_shift_modal",
                        &format!("Opening shift failed: {}", e),
                    ),
                }
                form.set(OpenShiftFormState::settled(submitted_input, &result));
            });
        })
    };

    let on_backdrop_click = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if form.can_dismiss() {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    match ModalView::from_flags(props.show, props.is_open) {
        ModalView::Hidden => html! {},
        ModalView::ShiftAlreadyOpen => html! {
            <div class="open-shift-modal-backdrop" onclick={on_backdrop_click}>
                <div class="open-shift-modal" onclick={on_modal_click}>
                    <div class="open-shift-modal-content">
                        <h3 class="open-shift-title">{"⚠️ Shift Already Open"}</h3>
                        <p class="open-shift-warning">
                            {"This register already has an active shift. Close the current shift before opening a new one."}
                        </p>
                        <div class="open-shift-buttons">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                            >
                                {"Close"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        },
        ModalView::OpeningForm => html! {
            <div class="open-shift-modal-backdrop" onclick={on_backdrop_click}>
                <div class="open-shift-modal" onclick={on_modal_click}>
                    <div class="open-shift-modal-content">
                        <h3 class="open-shift-title">{"💵 Open Register"}</h3>

                        {if let Some(error) = form.error.as_ref() {
                            html! {
                                <div class="open-shift-error">
                                    {error}
                                </div>
                            }
                        } else {
                            html! {}
                        }}

                        <form class="open-shift-form" onsubmit={on_submit}>
                            <div class="form-group">
                                <label for="opening-amount">{"Opening cash amount"}</label>
                                <input
                                    id="opening-amount"
                                    type="number"
                                    class="open-shift-input"
                                    placeholder="0.00"
                                    step="0.01"
                                    min="0"
                                    value={form.amount_input.clone()}
                                    oninput={on_amount_input}
                                    disabled={form.is_submitting}
                                    autofocus=true
                                />
                            </div>

                            <div class="open-shift-buttons">
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled={form.is_submitting}
                                >
                                    {if form.is_submitting {
                                        "Opening..."
                                    } else {
                                        "Open Shift"
                                    }}
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    onclick={on_cancel}
                                    disabled={form.is_submitting}
                                >
                                    {"Cancel"}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_handler_receives_amount() {
        let seen = Rc::new(Cell::new(None));
        let handler = {
            let seen = seen.clone();
            OpenShiftHandler::new(move |amount| {
                seen.set(Some(amount));
                async { Ok(()) }
            })
        };

        let _pending = handler.call(125.5);
        assert_eq!(seen.get(), Some(125.5));
    }

    #[test]
    fn test_handler_equality_is_by_identity() {
        let handler = OpenShiftHandler::new(|_| async { Ok(()) });
        let other = OpenShiftHandler::new(|_| async { Ok(()) });
        assert!(handler == handler.clone());
        assert!(handler != other);
    }
}
