//! Outbound-HTTP demonstration POST.
//!
//! Sends a short random key with a fixed value as a form body and reports
//! the response status. There is no contract with the endpoint beyond
//! "fire and report status".

use uuid::Uuid;

/// Posts `{<4-char random key>: 17}` to `url` and returns the HTTP status.
pub async fn post_sample(client: &reqwest::Client, url: &str) -> Result<u16, reqwest::Error> {
    let marker = Uuid::new_v4().to_string();
    let key = &marker[..4];

    let response = client.post(url).form(&[(key, "17")]).send().await?;
    Ok(response.status().as_u16())
}
