use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{format_currency, OpenShiftRequest};

mod components;
mod hooks;
mod services;
mod state;

use components::{OpenShiftHandler, OpenShiftModal};
use hooks::use_shift_status;
use services::api::ApiClient;
use services::date_utils::format_opened_at;
use services::logging::Logger;
use state::BannerClock;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let shift = use_shift_status(&api_client);

    let show_open_shift_modal = use_state(|| false);
    let success_message = use_state(|| Option::<String>::None);
    let banner_clock = use_mut_ref(BannerClock::default);

    // Kept stable across renders so the modal's props only change when the flags do
    let on_open_shift = {
        let api_client = api_client.clone();
        let refresh = shift.refresh.clone();
        let success_message = success_message.clone();
        let show_open_shift_modal = show_open_shift_modal.clone();
        let banner_clock = banner_clock.clone();

        use_memo((), move |_| {
            OpenShiftHandler::new(move |amount| {
                let api_client = api_client.clone();
                let refresh = refresh.clone();
                let success_message = success_message.clone();
                let show_open_shift_modal = show_open_shift_modal.clone();
                let banner_clock = banner_clock.clone();

                async move {
                    let response = api_client
                        .open_shift(OpenShiftRequest { opening_amount: amount })
                        .await?;

                    Logger::info_with_component("app", &response.success_message);
                    success_message.set(Some(response.success_message));
                    show_open_shift_modal.set(false);
                    refresh.emit(());

                    // Clear success message after 3 seconds unless a newer one replaced it
                    let ticket = banner_clock.borrow_mut().show();
                    let success_message_clear = success_message.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        if banner_clock.borrow().is_current(ticket) {
                            success_message_clear.set(None);
                        }
                    });

                    Ok::<(), String>(())
                }
            })
        })
    };

    let on_open_register_click = {
        let show_open_shift_modal = show_open_shift_modal.clone();
        Callback::from(move |_: MouseEvent| {
            show_open_shift_modal.set(true);
        })
    };

    let on_close = {
        let show_open_shift_modal = show_open_shift_modal.clone();
        Callback::from(move |_| {
            show_open_shift_modal.set(false);
        })
    };

    let status_text = match (&shift.state.status, &shift.state.error) {
        (Some(status), _) if status.is_open => {
            let amount = status
                .opening_amount
                .map(format_currency)
                .unwrap_or_else(|| "unknown amount".to_string());
            match status.opened_at.as_deref() {
                Some(opened_at) => format!("Shift open since {} with {}", format_opened_at(opened_at), amount),
                None => format!("Shift open with {}", amount),
            }
        }
        (Some(_), _) => "Register closed".to_string(),
        (None, Some(error)) => error.clone(),
        (None, None) => "Checking register...".to_string(),
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Register"}</h1>
                    <div class={classes!("shift-status", shift.state.is_open().then_some("open"))}>
                        {if shift.state.loading { "Loading...".to_string() } else { status_text }}
                    </div>
                    <button
                        type="button"
                        class="btn btn-primary"
                        onclick={on_open_register_click}
                    >
                        {"Open Register"}
                    </button>
                </div>
            </header>

            {if let Some(message) = (*success_message).as_ref() {
                html! {
                    <div class="form-message success">
                        {message}
                    </div>
                }
            } else { html! {} }}

            <OpenShiftModal
                show={*show_open_shift_modal}
                is_open={shift.state.is_open()}
                on_close={on_close}
                on_open_shift={(*on_open_shift).clone()}
            />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
