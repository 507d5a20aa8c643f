use dioxus::prelude::*;
use serde::Deserialize;

const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
const DEFAULT_CONTACT_METHOD: &str = "POST";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Get,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub contact_endpoint: String,
    pub contact_method: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            contact_method: DEFAULT_CONTACT_METHOD.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Anything other than `GET` submits as `POST`.
    pub fn submit_method(&self) -> SubmitMethod {
        if self.contact_method.trim().eq_ignore_ascii_case("get") {
            SubmitMethod::Get
        } else {
            SubmitMethod::Post
        }
    }
}

/// Loads the runtime config. Never fails: a missing or broken config file
/// leaves the page running on defaults.
pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        match fetch_runtime_config().await {
            Ok(config) => config,
            Err(message) => {
                tracing::warn!(%message, "config: falling back to defaults");
                RuntimeConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| format!("config read failed: {err}"))?;
    parse_runtime_config(&body)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let contact_endpoint = std::env::var("CONTACT_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_CONTACT_ENDPOINT.to_string());
    let contact_method =
        std::env::var("CONTACT_METHOD").unwrap_or_else(|_| DEFAULT_CONTACT_METHOD.to_string());
    Ok(RuntimeConfig {
        contact_endpoint,
        contact_method,
    })
}

pub fn parse_runtime_config(body: &str) -> Result<RuntimeConfig, String> {
    let config: RuntimeConfig =
        serde_json::from_str(body).map_err(|err| format!("config decode failed: {err}"))?;
    if config.contact_endpoint.trim().is_empty() {
        return Err("config decode failed: contactEndpoint is empty".to_string());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_keys_take_defaults() {
        assert_eq!(parse_runtime_config("{}"), Ok(RuntimeConfig::default()));
    }

    #[test]
    fn reads_camel_case_keys() {
        let config = parse_runtime_config(
            r#"{"contactEndpoint":"https://forms.example.com/f/abc","contactMethod":"get"}"#,
        )
        .expect("valid config");
        assert_eq!(config.contact_endpoint, "https://forms.example.com/f/abc");
        assert_eq!(config.submit_method(), SubmitMethod::Get);
    }

    #[test]
    fn unknown_methods_post() {
        let config = RuntimeConfig {
            contact_method: "PUT".to_string(),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.submit_method(), SubmitMethod::Post);
    }

    #[test]
    fn rejects_empty_endpoint_and_bad_json() {
        assert!(parse_runtime_config(r#"{"contactEndpoint":"  "}"#).is_err());
        assert!(parse_runtime_config("not json").is_err());
    }
}
