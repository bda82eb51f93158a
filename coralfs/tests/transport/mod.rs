//! Transport pipeline tests against an in-process mock appliance.

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, put};
use axum::Router;
use std::collections::HashMap;

use coralfs::api::Export;
use coralfs::{Client, ClientConfig, CoralfsError};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const ONE_EXPORT: &str = include_str!("../export/fixtures/exports_1.json");

/// `admin:secret` in the shape reqwest puts on the wire.
const EXPECTED_AUTHORIZATION: &str = "Basic YWRtaW46c2VjcmV0";

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Serves the given router on an ephemeral port and returns its endpoint.
async fn serve(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock appliance should serve");
    });

    Ok(format!("http://{addr}"))
}

fn client_for(endpoint: &str) -> anyhow::Result<Client> {
    let config = ClientConfig::builder()
        .endpoint(endpoint)
        .username("admin")
        .password("secret")
        .build();

    Ok(Client::new(config)?)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(EXPECTED_AUTHORIZATION)
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[test_log::test(tokio::test)]
async fn test_success_response_decodes_and_auth_is_attached() -> anyhow::Result<()> {
    async fn list_exports(headers: HeaderMap) -> (StatusCode, String) {
        if !authorized(&headers) {
            return (StatusCode::UNAUTHORIZED, String::new());
        }
        (StatusCode::OK, ONE_EXPORT.to_string())
    }

    let app = Router::new().route("/platform/1/protocols/nfs/exports", get(list_exports));
    let endpoint = serve(app).await?;
    let client = client_for(&endpoint)?;

    let exports = client.exports().await?;
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].id, Some(24));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_empty_body_on_success_status_is_a_no_op() -> anyhow::Result<()> {
    async fn delete_export() -> StatusCode {
        StatusCode::NO_CONTENT
    }

    let app = Router::new().route(
        "/platform/1/protocols/nfs/exports/{id}",
        delete(delete_export),
    );
    let endpoint = serve(app).await?;
    let client = client_for(&endpoint)?;

    client.delete_export(24).await?;

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_structured_error_body_is_decoded() -> anyhow::Result<()> {
    async fn list_quotas() -> (StatusCode, String) {
        (
            StatusCode::NOT_FOUND,
            r#"{"errors":[{"code":"AEC_NOT_FOUND","field":"path","message":"no such directory"}]}"#
                .to_string(),
        )
    }

    let app = Router::new().route("/platform/1/quota/quotas", get(list_quotas));
    let endpoint = serve(app).await?;
    let client = client_for(&endpoint)?;

    let err = client
        .quota("/cfs/volumes/missing")
        .await
        .expect_err("the appliance reported a failure");

    match err {
        CoralfsError::Api(api) => {
            assert_eq!(api.status_code(), &404);
            assert_eq!(api.message(), "no such directory");
            assert_eq!(api.errors()[0].code, "AEC_NOT_FOUND");
        }
        other => panic!("expected an api error, got {other:?}"),
    }

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_unparseable_error_body_synthesizes_status_line() -> anyhow::Result<()> {
    async fn list_quotas() -> (StatusCode, String) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>backend unavailable</html>".to_string(),
        )
    }

    let app = Router::new().route("/platform/1/quota/quotas", get(list_quotas));
    let endpoint = serve(app).await?;
    let client = client_for(&endpoint)?;

    let err = client
        .quota("/cfs/volumes/tank")
        .await
        .expect_err("the appliance reported a failure");

    match err {
        CoralfsError::Api(api) => {
            assert_eq!(api.errors().len(), 1);
            assert_eq!(api.message(), "500 Internal Server Error");
        }
        other => panic!("expected an api error, got {other:?}"),
    }

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_partial_update_sends_only_populated_fields() -> anyhow::Result<()> {
    async fn update_export(body: String) -> StatusCode {
        // the explicit empty list must travel; nothing else may
        if body == r#"{"clients":[]}"# {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::PRECONDITION_FAILED
        }
    }

    let app = Router::new().route("/platform/1/protocols/nfs/exports/{id}", put(update_export));
    let endpoint = serve(app).await?;
    let client = client_for(&endpoint)?;

    client.clear_export_clients(3).await?;

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_export_volume_creates_when_no_export_covers_the_path() -> anyhow::Result<()> {
    async fn list_exports() -> (StatusCode, String) {
        (StatusCode::OK, "{}".to_string())
    }

    async fn create_export(body: String) -> (StatusCode, String) {
        let parsed: serde_json::Value =
            serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);

        if parsed["paths"] != serde_json::json!(["/cfs/volumes/tank"]) || !parsed["id"].is_null() {
            return (StatusCode::PRECONDITION_FAILED, String::new());
        }

        (StatusCode::OK, r#"{"id":52}"#.to_string())
    }

    let app = Router::new().route(
        "/platform/1/protocols/nfs/exports",
        get(list_exports).post(create_export),
    );
    let endpoint = serve(app).await?;
    let client = client_for(&endpoint)?;

    let id = client.export_volume("tank").await?;
    assert_eq!(id, 52);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_query_parameters_and_id_segment_are_applied() -> anyhow::Result<()> {
    async fn delete_volume(Query(params): Query<HashMap<String, String>>) -> StatusCode {
        if params.get("recursive").map(String::as_str) == Some("true") {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::PRECONDITION_FAILED
        }
    }

    let app = Router::new().route("/namespace/cfs/volumes/{name}", delete(delete_volume));
    let endpoint = serve(app).await?;
    let client = client_for(&endpoint)?;

    client.delete_volume("tank").await?;

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_create_export_rejects_explicit_empty_paths_locally() -> anyhow::Result<()> {
    // no server needed: the call must fail before any request is dispatched
    let client = client_for("http://127.0.0.1:9")?;

    let export = Export {
        paths: Some(vec![]),
        ..Export::default()
    };

    let err = client
        .create_export(&export)
        .await
        .expect_err("an export without a path is rejected");
    assert!(matches!(err, CoralfsError::NoPathSet));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_connection_failure_surfaces_as_transport_error() -> anyhow::Result<()> {
    // nothing listens on a closed port; the error model must not be invoked
    let client = client_for("http://127.0.0.1:9")?;

    let err = client
        .exports()
        .await
        .expect_err("nothing is listening on the endpoint");
    assert!(matches!(err, CoralfsError::Transport(_)));

    Ok(())
}
