use gloo::net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::configured_base_url;

#[derive(Debug, Serialize)]
struct LogRequest {
    level: &'static str,
    message: String,
    component: Option<String>,
}

/// Forwards frontend log lines to the backend's `/api/logs` endpoint.
///
/// Errors and warnings are mirrored to the browser console, since a failing
/// backend is often the thing being logged.
pub struct Logger;

impl Logger {
    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &'static str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level,
            message: message.to_string(),
            component,
        };
        let url = format!("{}/api/logs", configured_base_url());

        // Fire and forget
        spawn_local(async move {
            let post = match Request::post(&url).json(&request) {
                Ok(post) => post,
                Err(_) => return,
            };
            let _ = post.send().await;
        });
    }
}
