//! Shared execution path for resource operations.
//!
//! Every resource operation is a [`ResourcePath`] plus identifier values,
//! optional query pairs and an optional JSON body. [`execute`] expands the
//! path and hands the call to [`HttpClient::request`]. Responses with more
//! than one valid shape are fetched as [`Value`] and finished with
//! [`decode_value`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiResponse, HttpClient, HttpError, Transport};
use crate::rest::path::{build_path, ResourcePath};

/// Runs one resource operation and decodes the success body into `R`.
///
/// `ids` are matched positionally with [`ResourcePath::ids`].
///
/// # Errors
///
/// Returns [`HttpError::RequestConstruction`] if `ids` does not fill every
/// placeholder of the template, otherwise any error from
/// [`HttpClient::request`].
pub async fn execute<T, B, R>(
    client: &HttpClient<T>,
    path: &ResourcePath,
    ids: &[u64],
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<ApiResponse<R>, HttpError>
where
    T: Transport,
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let pairs: Vec<(&str, u64)> = path.ids.iter().copied().zip(ids.iter().copied()).collect();
    let relative_path = build_path(path.template, &pairs)?;

    tracing::debug!(
        "Executing {} via {} {}",
        path.operation.as_str(),
        path.http_method,
        relative_path
    );

    client
        .request(path.http_method, &relative_path, query, body)
        .await
}

/// Decodes an already-parsed success body into `R`.
///
/// # Errors
///
/// Returns [`HttpError::Decode`] with the field-level serde message if
/// `body` does not match `R`.
pub fn decode_value<R: DeserializeOwned>(status: u16, body: Value) -> Result<R, HttpError> {
    serde_json::from_value(body).map_err(|source| {
        tracing::warn!("Could not decode response (status {}): {}", status, source);
        HttpError::Decode { status, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::test_support::create_fake_client;
    use crate::clients::{HttpMethod, InvalidHttpRequestError};
    use crate::rest::path::ResourceOperation;

    const FIND: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Find,
        &["shop_id", "order_id"],
        "shops/{shop_id}/orders/{order_id}.json",
    );

    #[tokio::test]
    async fn test_execute_expands_ids_in_order() {
        let client = create_fake_client(200, "{}");
        let _: ApiResponse<serde_json::Value> =
            execute::<_, (), _>(&client, &FIND, &[42, 7], &[], None)
                .await
                .unwrap();

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert!(sent[0].url.as_str().ends_with("/v1/shops/42/orders/7.json"));
    }

    #[test]
    fn test_decode_value_keeps_field_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Named {
            #[allow(dead_code)]
            name: String,
        }

        let result = decode_value::<Named>(200, serde_json::json!({"title": "x"}));

        let Err(HttpError::Decode { status, source }) = result else {
            panic!("expected a decode error");
        };
        assert_eq!(status, 200);
        assert!(source.to_string().contains("missing field `name`"), "{source}");
    }

    #[tokio::test]
    async fn test_execute_reports_missing_id() {
        let client = create_fake_client(200, "{}");
        let result: Result<ApiResponse<serde_json::Value>, _> =
            execute::<_, (), _>(&client, &FIND, &[42], &[], None).await;

        assert!(matches!(
            result,
            Err(HttpError::RequestConstruction(
                InvalidHttpRequestError::UnresolvedPathParameter { .. }
            ))
        ));
        assert!(client.transport().sent.lock().unwrap().is_empty());
    }
}
