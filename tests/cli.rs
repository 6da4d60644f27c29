use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

fn search_body() -> &'static str {
    r#"[
        {"id":1,"title":"First Board","uri":"db/first","type":"dash-db","tags":[]},
        {"id":2,"title":"Second Board","uri":"db/second","type":"dash-db","tags":[]},
        {"id":3,"title":"Third Board","uri":"db/third","type":"dash-db","isStarred":true}
    ]"#
}

fn envelope(dashboard: &str) -> String {
    format!(r#"{{"meta":{{"slug":"x"}},"dashboard":{}}}"#, dashboard)
}

fn export_cmd(server: &MockServer, path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("dashboard-export").unwrap();
    cmd.arg("--url")
        .arg(server.base_url())
        .arg("--token")
        .arg("secret")
        .arg("--path")
        .arg(path);
    cmd
}

#[test]
fn exports_every_dashboard() {
    let server = MockServer::start();
    let search = server.mock(|when, then| {
        when.method(GET).path("/api/search").header("Authorization", "Bearer secret");
        then.status(200).body(search_body());
    });
    let bodies = [("first", "{\"n\": 1}"), ("second", "{\"n\": 2}"), ("third", "{\"n\": 3}")];
    for (uri, body) in bodies {
        server.mock(|when, then| {
            when.method(GET)
                .path(format!("/api/dashboards/db/{}", uri))
                .header("Authorization", "Bearer secret");
            then.status(200).body(envelope(body));
        });
    }

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dashboards");
    export_cmd(&server, &out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Requesting GET"));

    search.assert();
    assert_eq!(std::fs::read_to_string(out.join("first_board.json")).unwrap(), "{\"n\": 1}");
    assert_eq!(std::fs::read_to_string(out.join("second_board.json")).unwrap(), "{\"n\": 2}");
    assert_eq!(std::fs::read_to_string(out.join("third_board.json")).unwrap(), "{\"n\": 3}");
}

#[test]
fn empty_search_creates_directory_and_succeeds() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search");
        then.status(200).body("[]");
    });

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dashboards");
    export_cmd(&server, &out).assert().success();

    assert!(out.is_dir());
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn failed_fetch_stops_the_run() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search");
        then.status(200).body(search_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboards/db/first");
        then.status(200).body(envelope("{}"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboards/db/second");
        then.status(500).body("boom");
    });
    let third = server.mock(|when, then| {
        when.method(GET).path("/api/dashboards/db/third");
        then.status(200).body(envelope("{}"));
    });

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dashboards");
    export_cmd(&server, &out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"));

    assert!(out.join("first_board.json").exists());
    assert!(!out.join("third_board.json").exists());
    third.assert_hits(0);
}

#[test]
fn keep_going_exports_the_rest_but_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search");
        then.status(200).body(search_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboards/db/first");
        then.status(200).body(envelope("{}"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboards/db/second");
        then.status(200).body("not json");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboards/db/third");
        then.status(200).body(envelope("{}"));
    });

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dashboards");
    export_cmd(&server, &out).arg("--keep-going").assert().failure();

    assert!(out.join("first_board.json").exists());
    assert!(!out.join("second_board.json").exists());
    assert!(out.join("third_board.json").exists());
}

#[test]
fn unreachable_server_fails_without_creating_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dashboards");

    Command::cargo_bin("dashboard-export")
        .unwrap()
        .args(["--url", "http://127.0.0.1:1", "--token", "secret", "--path"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("request to http://127.0.0.1:1/api/search failed"));

    assert!(!out.exists());
}
