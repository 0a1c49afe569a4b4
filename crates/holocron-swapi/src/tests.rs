//! Tests for `SwapiClient` against a local axum server serving canned bodies.

use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use holocron_core::{FetchStatus, FilmSource, browser::Browser};
use tokio::net::TcpListener;

use crate::{Error, SwapiClient, SwapiConfig};

const FILMS_JSON: &str = r#"{
  "count": 2,
  "next": null,
  "previous": null,
  "results": [
    {
      "title": "A New Hope",
      "episode_id": 4,
      "opening_crawl": "It is a period of civil war.",
      "director": "George Lucas",
      "producer": "Gary Kurtz, Rick McCallum",
      "release_date": "1977-05-25",
      "url": "https://swapi.py4e.com/api/films/1/"
    },
    {
      "title": "The Empire Strikes Back",
      "episode_id": 5,
      "opening_crawl": "It is a dark time for the Rebellion.",
      "director": "Irvin Kershner",
      "producer": "Gary Kurtz, Rick McCallum",
      "release_date": "1980-05-17",
      "url": "https://swapi.py4e.com/api/films/2/"
    }
  ]
}"#;

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router).await.unwrap();
  });
  format!("http://{addr}/api/")
}

fn client(base_url: String) -> SwapiClient {
  SwapiClient::new(SwapiConfig {
    base_url,
    timeout: Duration::from_secs(5),
  })
  .unwrap()
}

async fn films_server(body: &'static str) -> String {
  serve(Router::new().route("/api/films/", get(move || async move { body }))).await
}

// ─── Success ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_films_decodes_results_in_order() {
  let c = client(films_server(FILMS_JSON).await);

  let films = c.list_films().await.unwrap();
  assert_eq!(films.len(), 2);
  assert_eq!(films[0].title, "A New Hope");
  assert_eq!(films[1].director, "Irvin Kershner");
}

#[tokio::test]
async fn browser_over_swapi_resolves_from_cache() {
  let base = films_server(FILMS_JSON).await;
  let b = Browser::new(client(base).into(), Duration::from_millis(300));

  assert_eq!(b.trigger_fetch().await, FetchStatus::Succeeded);
  assert_eq!(b.select_film(holocron_core::FilmId(2)), FetchStatus::Succeeded);
  assert_eq!(b.selected_film().unwrap().title, "The Empire Strikes Back");
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn error_status_is_a_network_failure() {
  let base = serve(Router::new().route(
    "/api/films/",
    get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
  ))
  .await;

  let err = client(base).fetch_films().await.unwrap_err();
  assert!(matches!(
    err,
    Error::Status { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE
  ));
  assert!(matches!(
    holocron_core::Error::from(err),
    holocron_core::Error::Network(_)
  ));
}

#[tokio::test]
async fn missing_route_is_a_network_failure() {
  let base = serve(Router::new()).await;
  let err = client(base).list_films().await.unwrap_err();
  assert!(matches!(err, Error::Status { .. }));
}

#[tokio::test]
async fn invalid_json_is_malformed() {
  let err = client(films_server("<html>oops</html>").await)
    .list_films()
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Decode(_)));
  assert!(matches!(
    holocron_core::Error::from(err),
    holocron_core::Error::MalformedResponse(_)
  ));
}

#[tokio::test]
async fn missing_fields_are_malformed() {
  let body = r#"{"results":[{"title":"A New Hope","episode_id":4}]}"#;
  let err = client(films_server(body).await).list_films().await.unwrap_err();
  assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn missing_results_envelope_is_malformed() {
  let err = client(films_server("[]").await).list_films().await.unwrap_err();
  assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_failure() {
  // Bind then drop to get a port nothing listens on.
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let err = client(format!("http://{addr}/api"))
    .list_films()
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn failed_fetch_surfaces_as_status_and_message() {
  let base = serve(Router::new().route(
    "/api/films/",
    get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
  ))
  .await;
  let b = Browser::new(client(base).into(), Duration::from_millis(300));

  assert_eq!(b.trigger_fetch().await, FetchStatus::Failed);
  assert!(b.collection().is_empty());
  let msg = b.last_error().unwrap();
  assert!(msg.starts_with("network failure:"), "{msg}");
  assert!(msg.contains("500"), "{msg}");
}
