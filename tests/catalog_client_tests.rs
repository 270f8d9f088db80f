use catalog_client::{AppError, CatalogClient, Config, FetchErrorKind};
use futures::future::join_all;
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn client_for(server: &MockServer, timeout: Duration) -> CatalogClient {
    CatalogClient::with_timeout(&Config::new(server.uri()), timeout).unwrap()
}

fn track_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Title {id}"),
        "artist": format!("Artist {id}"),
        "filename": format!("{id}.mp3"),
        "img_path": format!("{id}.png")
    })
}

/// GET {base}/beats/ answering one beat decodes into exactly that track
#[tokio::test]
async fn test_collection_success_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beats/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":"b1","title":"Beat One","artist":"A","filename":"b1.mp3","img_path":"b1.png"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let tracks = client.fetch_collection("beats").await;

    assert_eq!(tracks.len(), 1);
    let beat = &tracks[0];
    assert_eq!(beat.id, "b1");
    assert_eq!(beat.title, "Beat One");
    assert_eq!(beat.artist, "A");
    assert_eq!(beat.filename, "b1.mp3");
    assert_eq!(beat.img_path, "b1.png");
}

/// A 404 on a single lookup surfaces as a not-found error
#[tokio::test]
async fn test_single_not_found_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beat/xyz"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let result = client.fetch_single("beat", "xyz").await;

    match result {
        Err(AppError::ApiNotFound { url }) => assert_eq!(url, format!("{}/beat/xyz", server.uri())),
        other => panic!("expected not found, got {other:?}"),
    }
}

/// A server that never answers yields an empty list within the budget
#[tokio::test]
async fn test_collection_timeout_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/music/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([track_json("m1")]))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(250);
    let client = client_for(&server, timeout);

    let started = Instant::now();
    let tracks = client.fetch_music().await;

    assert!(tracks.is_empty());
    assert!(started.elapsed() < timeout + Duration::from_secs(2));
}

/// Vocals for a beat keep their beat reference
#[tokio::test]
async fn test_vocals_lookup_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vocal/beat/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id":"v1","title":"T","artist":"Ar","filename":"v1.mp3","beat_id":"b1"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let vocals = client.fetch_vocals_for_beat("b1").await;

    assert_eq!(vocals.len(), 1);
    assert_eq!(vocals[0].id, "v1");
    assert_eq!(vocals[0].beat_id, "b1");
}

/// Every failure mode degrades listing operations to empty and fails single lookups
#[tokio::test]
async fn test_failure_modes_follow_policy() {
    let server = MockServer::start().await;

    let failing = [
        ("/beats/", ResponseTemplate::new(500)),
        ("/music/", ResponseTemplate::new(200).set_body_string("not json")),
        ("/vocal/beat/b1", ResponseTemplate::new(200).set_body_json(json!({"id":"v1"}))),
        ("/beat/b1", ResponseTemplate::new(200).set_body_string("{\"id\":")),
    ];
    for (route, template) in failing {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(template)
            .mount(&server)
            .await;
    }

    let client = client_for(&server, Duration::from_secs(5));

    assert!(client.fetch_beats().await.is_empty());
    assert!(client.fetch_music().await.is_empty());
    assert!(client.fetch_vocals_for_beat("b1").await.is_empty());

    let err = client.fetch_single("beat", "b1").await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Decode);
    assert!(std::error::Error::source(&err).is_some());
}

/// Concurrent calls each see only their own response
#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    let ids = ["a", "b", "c", "d", "e", "f"];

    for (i, id) in ids.iter().enumerate() {
        // Stagger delays so responses complete out of request order.
        let delay = Duration::from_millis(((ids.len() - i) * 40) as u64);
        Mock::given(method("GET"))
            .and(path(format!("/beat/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(track_json(id))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
    }

    let client = client_for(&server, Duration::from_secs(5));
    let results = join_all(ids.iter().map(|id| client.fetch_single("beat", id))).await;

    for (id, result) in ids.iter().zip(results) {
        let track = result.unwrap();
        assert_eq!(track.id, *id);
        assert_eq!(track.filename, format!("{id}.mp3"));
    }
}

/// One call timing out does not disturb a concurrent call that succeeds
#[tokio::test]
async fn test_timeout_does_not_affect_sibling_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beat/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(track_json("slow"))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/beat/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_json("fast")))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_millis(500));
    let (slow, fast) = tokio::join!(
        client.fetch_single("beat", "slow"),
        client.fetch_single("beat", "fast")
    );

    assert_eq!(slow.unwrap_err().kind(), FetchErrorKind::Timeout);
    assert_eq!(fast.unwrap().id, "fast");
}

/// The base URL is used as configured, with a trailing slash tolerated
#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/music/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([track_json("m1"), track_json("m2")])))
        .mount(&server)
        .await;

    let config = Config::new(format!("{}/api/", server.uri()));
    let client = CatalogClient::with_timeout(&config, Duration::from_secs(5)).unwrap();

    let tracks = client.fetch_music().await;
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[1].id, "m2");
}
