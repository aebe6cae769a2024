//! Server functions

use leptos::*;
use tf_core::{ContactForm, SubmissionError};

/// Validate an inquiry again on the server and post it once to the
/// configured contact endpoint.
///
/// The outer error means the inquiry never reached the endpoint. The inner
/// result is the endpoint's own answer.
#[server(SubmitInquiry, "/api")]
pub async fn submit_inquiry(
    form: ContactForm,
) -> Result<Result<(), SubmissionError>, ServerFnError> {
    use tf_core::{ContactEndpoint, HttpContactEndpoint};

    let request = form.validate().map_err(|errors| {
        tracing::debug!("Inquiry failed server-side validation: {}", errors);
        ServerFnError::<leptos::server_fn::error::NoCustomError>::Args(errors.to_string())
    })?;

    let endpoint = use_context::<HttpContactEndpoint>()
        .ok_or_else(|| ServerFnError::<leptos::server_fn::error::NoCustomError>::ServerError("contact endpoint not configured".to_string()))?;

    Ok(endpoint.submit(&request).await)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use tf_core::Field;

    #[tokio::test]
    async fn test_invalid_inquiry_is_refused_before_posting() {
        let mut form = ContactForm::new();
        form.set(Field::FirstName, "Jo");
        form.set(Field::Email, "a@b");

        let err = submit_inquiry(form).await.unwrap_err();

        match err {
            ServerFnError::Args(message) => {
                assert!(message.contains("email: Invalid email address"), "{}", message);
                assert!(!message.contains("firstName"), "{}", message);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
