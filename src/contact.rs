use std::collections::BTreeMap;
use std::sync::LazyLock;

use dioxus::prelude::*;
use gloo_net::http::Request;
use regex::Regex;
use thiserror::Error;

use crate::config::{RuntimeConfig, SubmitMethod};
use crate::content::ServiceOption;
use crate::timing::sleep_ms;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;
pub const SUCCESS_DISMISS_MS: u32 = 5000;

const SUCCESS_MESSAGE: &str =
    "Thanks for contacting me! I’ll review your message and respond shortly.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// `application/x-www-form-urlencoded` field set, in form order.
    pub fn encoded(&self) -> String {
        [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("service", self.service.as_str()),
            ("message", self.message.trim()),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Service,
    Message,
}

impl Field {
    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => "Name must be at least 2 characters long",
            Field::Email => "Please enter a valid email address",
            Field::Service => "Please select a service",
            Field::Message => "Message must be at least 10 characters long",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValidation {
    errors: BTreeMap<Field, &'static str>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[cfg(test)]
    pub fn failing_fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate(form: &ContactForm) -> FormValidation {
    let mut errors = BTreeMap::new();
    if form.name.trim().chars().count() < MIN_NAME_LEN {
        errors.insert(Field::Name, Field::Name.error_message());
    }
    if !is_valid_email(form.email.trim()) {
        errors.insert(Field::Email, Field::Email.error_message());
    }
    if form.service.is_empty() {
        errors.insert(Field::Service, Field::Service.error_message());
    }
    if form.message.trim().chars().count() < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, Field::Message.error_message());
    }
    FormValidation { errors }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
    #[error("contact request failed: {0}")]
    Network(String),
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Status(_) => "Oops! Something went wrong. Please try again.",
            SubmitError::Network(_) => "Network error. Please check your connection.",
        }
    }
}

pub async fn submit_contact(config: &RuntimeConfig, form: &ContactForm) -> Result<(), SubmitError> {
    let body = form.encoded();
    let builder = match config.submit_method() {
        SubmitMethod::Post => Request::post(&config.contact_endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body),
        SubmitMethod::Get => {
            let separator = if config.contact_endpoint.contains('?') { '&' } else { '?' };
            Request::get(&format!("{}{separator}{body}", config.contact_endpoint))
                .header("Accept", "application/json")
                .build()
        }
    };
    let request = builder.map_err(|err| SubmitError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sent,
    Failed(SubmitError),
}

/// Busy flag and status notice of the contact form across submissions.
///
/// Every successful send gets a new generation; a success dismissal only
/// applies to the generation that raised it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitState {
    busy: bool,
    status: FormStatus,
    generation: u64,
}

impl SubmitState {
    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Marks a submission in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.status = FormStatus::Idle;
        true
    }

    /// Clears the busy flag whatever the outcome. On success returns the
    /// generation to hand to [`SubmitState::dismiss`] later.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> Option<u64> {
        self.busy = false;
        match outcome {
            Ok(()) => {
                self.generation += 1;
                self.status = FormStatus::Sent;
                Some(self.generation)
            }
            Err(err) => {
                self.status = FormStatus::Failed(err);
                None
            }
        }
    }

    pub fn dismiss(&mut self, generation: u64) {
        if self.generation == generation && self.status == FormStatus::Sent {
            self.status = FormStatus::Idle;
        }
    }
}

#[component]
pub fn ContactSection(services: Vec<ServiceOption>) -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut form = use_signal(ContactForm::default);
    let mut validation = use_signal(FormValidation::default);
    let mut submit = use_signal(SubmitState::default);

    let mut revalidate = move || validation.set(validate(&form.peek()));

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        if submit.peek().busy() {
            return;
        }
        let snapshot = form();
        let result = validate(&snapshot);
        let valid = result.is_valid();
        validation.set(result);
        if !valid {
            tracing::debug!("contact: validation failed");
            return;
        }
        if !submit.write().begin() {
            return;
        }
        let config = config.clone();
        spawn(async move {
            tracing::debug!(endpoint = %config.contact_endpoint, "contact: submitting");
            let outcome = submit_contact(&config, &snapshot).await;
            match &outcome {
                Ok(()) => tracing::info!("contact: message sent"),
                Err(err) => tracing::warn!(error = %err, "contact: submission failed"),
            }
            let dismissal = submit.write().finish(outcome);
            let Some(generation) = dismissal else {
                return;
            };
            form.set(ContactForm::default());
            validation.set(FormValidation::default());
            sleep_ms(SUCCESS_DISMISS_MS).await;
            submit.write().dismiss(generation);
        });
    };

    let current = form();
    let errors = validation();
    let state = submit();
    let busy = state.busy();
    let status_view = match state.status().clone() {
        FormStatus::Idle => rsx! {},
        FormStatus::Sent => rsx! {
            p { id: "form-status", class: "form-status success", role: "status", "{SUCCESS_MESSAGE}" }
        },
        FormStatus::Failed(err) => rsx! {
            p { id: "form-status", class: "form-status error", role: "alert", "{err.user_message()}" }
        },
    };

    rsx! {
        form { id: "contact-form", class: "contact-form", onsubmit: onsubmit,
            div { class: "form-group",
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    value: "{current.name}",
                    oninput: move |event| form.write().name = event.value(),
                    onblur: move |_| revalidate(),
                }
                FieldError { message: errors.error(Field::Name) }
            }
            div { class: "form-group",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    value: "{current.email}",
                    oninput: move |event| form.write().email = event.value(),
                    onblur: move |_| revalidate(),
                }
                FieldError { message: errors.error(Field::Email) }
            }
            div { class: "form-group",
                label { r#for: "service", "Service" }
                select {
                    id: "service",
                    name: "service",
                    value: "{current.service}",
                    onchange: move |event| form.write().service = event.value(),
                    onblur: move |_| revalidate(),
                    option { value: "", "Select a service" }
                    for service in services.iter() {
                        option { key: "{service.value}", value: service.value, "{service.label}" }
                    }
                }
                FieldError { message: errors.error(Field::Service) }
            }
            div { class: "form-group",
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "6",
                    value: "{current.message}",
                    oninput: move |event| form.write().message = event.value(),
                    onblur: move |_| revalidate(),
                }
                FieldError { message: errors.error(Field::Message) }
            }
            button {
                r#type: "submit",
                class: if busy { "btn btn-primary loading" } else { "btn btn-primary" },
                disabled: busy,
                if busy {
                    span { class: "btn-loading", i { class: "fas fa-spinner fa-spin" } " Sending..." }
                } else {
                    span { class: "btn-text", "Send Message" }
                }
            }
            {status_view}
        }
    }
}

#[component]
fn FieldError(message: Option<&'static str>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "form-error", "{message}" }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Al".to_string(),
            email: "a@b.c".to_string(),
            service: "design".to_string(),
            message: "0123456789".to_string(),
        }
    }

    #[test]
    fn minimal_form_passes() {
        assert!(validate(&valid_form()).is_valid());
    }

    #[test]
    fn each_field_fails_alone() {
        let cases = [
            (Field::Name, ContactForm { name: " A ".into(), ..valid_form() }),
            (Field::Email, ContactForm { email: "a@b".into(), ..valid_form() }),
            (Field::Service, ContactForm { service: String::new(), ..valid_form() }),
            (Field::Message, ContactForm { message: "012345678".into(), ..valid_form() }),
        ];
        for (field, form) in cases {
            let result = validate(&form);
            assert_eq!(result.failing_fields(), vec![field]);
            assert_eq!(result.error(field), Some(field.error_message()));
        }
    }

    #[test]
    fn trimming_applies_before_length_checks() {
        let form = ContactForm {
            message: "   short   ".into(),
            ..valid_form()
        };
        assert_eq!(validate(&form).failing_fields(), vec![Field::Message]);
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("someone@example.com"));
        assert!(!is_valid_email("some one@example.com"));
        assert!(!is_valid_email("someone@@example.com"));
        assert!(!is_valid_email("someone.example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn empty_form_reports_every_field() {
        assert_eq!(
            validate(&ContactForm::default()).failing_fields(),
            vec![Field::Name, Field::Email, Field::Service, Field::Message]
        );
    }

    #[test]
    fn encodes_trimmed_fields() {
        let form = ContactForm {
            name: " Ana Lee ".into(),
            email: "ana@example.com".into(),
            service: "web-development".into(),
            message: "Hi & bye".into(),
        };
        assert_eq!(
            form.encoded(),
            "name=Ana%20Lee&email=ana%40example.com&service=web-development&message=Hi%20%26%20bye"
        );
    }

    #[test]
    fn busy_clears_on_success() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(state.busy());
        assert_eq!(state.finish(Ok(())), Some(1));
        assert!(!state.busy());
        assert_eq!(state.status(), &FormStatus::Sent);
    }

    #[test]
    fn busy_clears_on_error_status() {
        let mut state = SubmitState::default();
        state.begin();
        assert_eq!(state.finish(Err(SubmitError::Status(500))), None);
        assert!(!state.busy());
        assert_eq!(state.status(), &FormStatus::Failed(SubmitError::Status(500)));
    }

    #[test]
    fn busy_clears_on_network_failure() {
        let mut state = SubmitState::default();
        state.begin();
        let failure = SubmitError::Network("offline".into());
        assert_eq!(state.finish(Err(failure.clone())), None);
        assert!(!state.busy());
        assert_eq!(state.status(), &FormStatus::Failed(failure));
    }

    #[test]
    fn second_submit_is_refused_while_busy() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(!state.begin());
        state.finish(Err(SubmitError::Status(502)));
        assert!(state.begin());
        assert_eq!(state.status(), &FormStatus::Idle);
    }

    #[test]
    fn success_notice_dismisses_after_its_own_timer() {
        let mut state = SubmitState::default();
        state.begin();
        let generation = state.finish(Ok(())).expect("success generation");
        state.dismiss(generation);
        assert_eq!(state.status(), &FormStatus::Idle);
    }

    #[test]
    fn stale_dismissal_leaves_newer_notice() {
        let mut state = SubmitState::default();
        state.begin();
        let first = state.finish(Ok(())).expect("first generation");
        state.begin();
        let second = state.finish(Ok(())).expect("second generation");
        assert_ne!(first, second);

        state.dismiss(first);
        assert_eq!(state.status(), &FormStatus::Sent);
        state.dismiss(second);
        assert_eq!(state.status(), &FormStatus::Idle);
    }

    #[test]
    fn stale_dismissal_leaves_later_failure() {
        let mut state = SubmitState::default();
        state.begin();
        let generation = state.finish(Ok(())).expect("success generation");
        state.begin();
        state.finish(Err(SubmitError::Status(503)));
        state.dismiss(generation);
        assert_eq!(state.status(), &FormStatus::Failed(SubmitError::Status(503)));
    }

    #[test]
    fn failures_are_distinguishable() {
        assert_ne!(
            SubmitError::Status(500).user_message(),
            SubmitError::Network("offline".into()).user_message()
        );
        assert_eq!(
            SubmitError::Status(422).to_string(),
            "contact endpoint answered with status 422"
        );
    }
}
