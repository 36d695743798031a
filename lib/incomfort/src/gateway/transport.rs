use async_trait::async_trait;
use chipp_http::{HttpClient, HttpMethod, NoInterceptor};
use log::trace;

use super::Error;

#[cfg(test)]
use mockall::automock;

/// Performs GET requests against the gateway and returns raw bodies.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Vec<u8>, Error>;
}

pub struct HttpTransport {
    host: String,
    http_client: HttpClient<NoInterceptor>,
}

impl HttpTransport {
    pub fn new(host: &str) -> Result<Self, Error> {
        let base_url = format!("http://{host}");
        let http_client = HttpClient::new(base_url.as_str())?;

        Ok(Self {
            host: host.to_string(),
            http_client,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = format!("http://{}{}", self.host, path);
        let mut request = self.http_client.new_request_with_url(url)?;
        request.set_method(HttpMethod::Get);

        trace!("GET {path}");

        let body = self
            .http_client
            .perform_request(request, |req, res| {
                if res.status_code == 200 {
                    Ok(res.body)
                } else {
                    Err((req, res).into())
                }
            })
            .await?;

        trace!("response: {}", String::from_utf8_lossy(&body));

        Ok(body)
    }
}
