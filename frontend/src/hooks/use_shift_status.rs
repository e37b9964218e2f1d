use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::ShiftStatus;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
pub struct ShiftState {
    pub status: Option<ShiftStatus>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ShiftState {
    /// Whether the register is known to have an active shift
    pub fn is_open(&self) -> bool {
        self.status.as_ref().map(|s| s.is_open).unwrap_or(false)
    }
}

pub struct UseShiftStatusResult {
    pub state: ShiftState,
    pub refresh: Callback<()>,
}

/// Hook for loading the register's shift status
#[hook]
pub fn use_shift_status(api_client: &ApiClient) -> UseShiftStatusResult {
    let status = use_state(|| Option::<ShiftStatus>::None);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let status = status.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let status = status.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_shift_status().await {
                    Ok(response) => {
                        status.set(Some(response));
                        error.set(None);
                    }
                    Err(e) => {
                        let message = format!("Failed to fetch shift status: {}", e);
                        Logger::error_with_component("use_shift_status", &message);
                        status.set(None);
                        error.set(Some(message));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Fetch on mount
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseShiftStatusResult {
        state: ShiftState {
            status: (*status).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_not_open() {
        assert!(!ShiftState::default().is_open());
        let failed = ShiftState {
            status: None,
            loading: false,
            error: Some("Network error".to_string()),
        };
        assert!(!failed.is_open());
    }

    #[test]
    fn test_open_status() {
        let state = ShiftState {
            status: Some(ShiftStatus {
                is_open: true,
                opening_amount: Some(150.0),
                opened_at: Some("2025-06-05T09:05:00Z".to_string()),
            }),
            loading: false,
            error: None,
        };
        assert!(state.is_open());
    }
}
