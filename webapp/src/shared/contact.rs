use async_trait::async_trait;
use gloo_net::http::Request;

use common::contact::{ContactError, ContactForm, ContactTransport};

// fixed when the webapp is built, e.g. a form relay such as formspree
pub const CONTACT_ENDPOINT: Option<&str> = option_env!("FOLIO_CONTACT_ENDPOINT");

pub struct HttpTransport {
    endpoint: Option<&'static str>,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            endpoint: CONTACT_ENDPOINT.filter(|e| !e.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        let endpoint = self.endpoint.ok_or(ContactError::NotConfigured)?;

        let resp = Request::post(endpoint)
            .header("Accept", "application/json")
            .json(form)
            .map_err(|err| ContactError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;

        if resp.ok() {
            Ok(())
        } else {
            Err(ContactError::Rejected {
                status: resp.status(),
                message: resp.text().await.unwrap_or_default(),
            })
        }
    }
}
