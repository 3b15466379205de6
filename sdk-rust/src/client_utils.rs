use crate::LanguageModelError;
use eventsource_stream::{EventStreamError, Eventsource};
use futures::{stream::StreamExt, Stream};
use reqwest::{header::HeaderMap, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::pin::Pin;

pub type ChunkStream<R> = Pin<Box<dyn Stream<Item = Result<R, LanguageModelError>> + Send>>;

async fn post_json<T: Serialize>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
) -> Result<Response, LanguageModelError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(LanguageModelError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}

/// POST `data` and decode the JSON body. Non-2xx answers become
/// [`LanguageModelError::StatusCode`].
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
) -> Result<R, LanguageModelError> {
    let response = post_json(client, url, data, headers).await?;
    Ok(response.json::<R>().await?)
}

/// POST `data` and decode every server-sent event as one `R`. Events with
/// an empty data field are skipped.
pub async fn send_sse_stream<T: Serialize, R: DeserializeOwned + Send + 'static>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
    provider: &'static str,
) -> Result<ChunkStream<R>, LanguageModelError> {
    let response = post_json(client, url, data, headers).await?;
    let mut events = response.bytes_stream().eventsource();

    let stream = async_stream::try_stream! {
        while let Some(event) = events.next().await {
            let event = event.map_err(|error| match error {
                EventStreamError::Transport(error) => LanguageModelError::Transport(error),
                EventStreamError::Utf8(error) => LanguageModelError::Invariant(
                    provider,
                    format!("Stream data is not valid UTF-8: {error}"),
                ),
                EventStreamError::Parser(error) => LanguageModelError::Invariant(
                    provider,
                    format!("Malformed event stream: {error}"),
                ),
            })?;
            if event.data.is_empty() {
                continue;
            }

            let chunk: R = serde_json::from_str(&event.data).map_err(|error| {
                LanguageModelError::Invariant(
                    provider,
                    format!("Failed to parse stream chunk: {error}"),
                )
            })?;
            yield chunk;
        }
    };

    Ok(Box::pin(stream))
}
