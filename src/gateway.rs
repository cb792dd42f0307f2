//! Paystack gateway client.
//!
//! The client is built at startup and carries the base URL and bearer-token
//! auth. No settlement flow runs through it yet: payment creation only
//! derives the hosted authorization URL.

use reqwest::{Client, Method, RequestBuilder};

use crate::Error;

pub const PAYSTACK_BASE_URL: &str = "https://api.paystack.co";
pub const PAYSTACK_AUTHORIZE_URL: &str = "https://paystack.com/authorize";

#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GatewayClient {
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        let http = Client::builder().use_rustls_tls().build()?;
        Ok(Self {
            http,
            base_url: PAYSTACK_BASE_URL.to_string(),
            api_key,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Starts a request against the gateway API. `path` is appended to the
    /// base URL and the bearer token is attached when one is configured.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let builder = self.http.request(method, url);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Hosted checkout page the customer would be sent to for this payment.
    pub fn authorization_url(&self, payment_id: &str) -> String {
        format!("{}/{}", PAYSTACK_AUTHORIZE_URL, payment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_request_carries_bearer_token() {
        let client = GatewayClient::new(Some("sk_test_123".into())).unwrap();
        let request = client
            .request(Method::GET, "/transaction/verify/PAY-1")
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.paystack.co/transaction/verify/PAY-1"
        );
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer sk_test_123"
        );
    }

    #[test]
    fn test_request_without_key_has_no_auth_header() {
        let client = GatewayClient::new(None).unwrap();
        assert!(!client.has_api_key());

        let request = client.request(Method::POST, "transaction/initialize").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.method(), &Method::POST);
    }

    #[test]
    fn test_custom_base_url() {
        let client = GatewayClient::new(None)
            .unwrap()
            .with_base_url("http://localhost:9000/");
        assert_eq!(client.base_url(), "http://localhost:9000");

        let request = client.request(Method::GET, "bank").build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:9000/bank");
    }

    #[test]
    fn test_authorization_url() {
        let client = GatewayClient::new(None).unwrap();
        assert_eq!(
            client.authorization_url("PAY-1"),
            "https://paystack.com/authorize/PAY-1"
        );
    }
}
