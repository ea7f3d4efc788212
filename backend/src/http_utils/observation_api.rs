//! Thin reqwest wrappers around the observation API.

use bytes::Bytes;
use serde::de::DeserializeOwned;

fn get_http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// `url?query`, or `url` alone when there is nothing to filter on.
pub fn url_with_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{url}&{query}")
    } else {
        format!("{url}?{query}")
    }
}

async fn read_response_text(response: reqwest::Response) -> anyhow::Result<String> {
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        tracing::error!("observation API error {}: {}", status, response_txt);
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    Ok(response_txt)
}

pub async fn api_get_json<T: DeserializeOwned>(url: String) -> anyhow::Result<T> {
    tracing::info!("GET {}", url);
    let t0 = std::time::Instant::now();
    let response = get_http_client().get(&url).send().await?;
    let response_txt = read_response_text(response).await?;
    tracing::debug!("GET {} -> {} bytes in {}ms", url, response_txt.len(), t0.elapsed().as_millis());
    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}

/// POST with the body formatted like a GET query string, which is how the API
/// reads filters on POST endpoints.
pub async fn api_post_form<T: DeserializeOwned>(url: String, body: String) -> anyhow::Result<T> {
    tracing::info!("POST {} ({})", url, body);
    let response = get_http_client()
        .post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await?;
    let response_txt = read_response_text(response).await?;
    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}

/// Raw body plus its content type, for binary payloads such as vector tiles.
pub async fn api_get_bytes(url: String) -> anyhow::Result<(String, Bytes)> {
    tracing::debug!("GET {}", url);
    let response = get_http_client().get(&url).send().await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {} for {}", status, url);
    }
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let body = response.bytes().await?;
    Ok((content_type, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn query_is_only_appended_when_present() {
        assert_eq!(url_with_query("http://h/api/x/", ""), "http://h/api/x/");
        assert_eq!(url_with_query("http://h/api/x/", "status=seen"), "http://h/api/x/?status=seen");
        assert_eq!(url_with_query("http://h/api/x/?zoom=3", "status=seen"), "http://h/api/x/?zoom=3&status=seen");
    }
}
