//! HTTP transport over libcurl.
//!
//! One `Easy` handle per request, configured from [`CurlOptions`]. Small JSON
//! bodies are buffered by [`HttpClient::get_bytes`]; asset bodies are streamed
//! by the downloader through [`HttpClient::easy`]. Every transfer is aborted
//! when it stalls below the low-speed limit; only API calls get a whole-request
//! deadline, so large assets may take as long as they keep moving.

mod headers;

pub use headers::ResponseHeaders;

use crate::config::CtfdlConfig;
use std::collections::HashMap;
use std::time::Duration;

/// Transport options shared by every request.
#[derive(Debug, Clone)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    /// Whole-request limit for API calls; `None` means no limit.
    pub api_timeout: Option<Duration>,
    /// Abort when fewer than this many bytes/s arrive for `low_speed_time`.
    /// 0 disables stall detection.
    pub low_speed_limit: u32,
    pub low_speed_time: Duration,
    /// Receive buffer size; bounds the chunk handed to each write callback.
    pub buffer_size: Option<usize>,
    pub user_agent: String,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self::from_config(&CtfdlConfig::default())
    }
}

impl CurlOptions {
    pub fn from_config(cfg: &CtfdlConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            api_timeout: (cfg.request_timeout_secs > 0)
                .then(|| Duration::from_secs(cfg.request_timeout_secs)),
            low_speed_limit: cfg.low_speed_limit,
            low_speed_time: Duration::from_secs(cfg.low_speed_time_secs),
            buffer_size: Some(cfg.chunk_size),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Status and body of a buffered response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP client. Cheap to share across worker threads.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    opts: CurlOptions,
}

impl HttpClient {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }

    /// Builds a GET handle for `url` with the caller's headers attached.
    pub fn easy(
        &self,
        url: &str,
        custom_headers: &HashMap<String, String>,
    ) -> Result<curl::easy::Easy, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.opts.user_agent)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        if self.opts.low_speed_limit > 0 {
            easy.low_speed_limit(self.opts.low_speed_limit)?;
            easy.low_speed_time(self.opts.low_speed_time)?;
        }
        if let Some(sz) = self.opts.buffer_size {
            easy.buffer_size(sz)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in custom_headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !custom_headers.is_empty() {
            easy.http_headers(list)?;
        }
        Ok(easy)
    }

    /// GET `url` and buffer the whole body, bounded by the API deadline.
    /// Non-2xx statuses are returned, not raised.
    pub fn get_bytes(
        &self,
        url: &str,
        custom_headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, curl::Error> {
        tracing::debug!(url, "GET");
        let mut body = Vec::new();
        let mut easy = self.easy(url, custom_headers)?;
        if let Some(t) = self.opts.api_timeout {
            easy.timeout(t)?;
        }
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET complete");
        Ok(HttpResponse { status, body })
    }
}
