#![allow(dead_code)]

use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
use serde_json::{Value, json};

mod context;

pub(crate) use context::TestContext;

/// Wraps `result` the way the tracker wraps successful responses.
pub(crate) fn tracker_success(result: Value) -> Value {
    json!({
        "status": "success",
        "executiontime": 0.001,
        "message": "",
        "version": "0.20.0",
        "result": result,
    })
}

/// Spawns a tracker that expects a single `/topologies` request scoped to
/// `cluster[/role[/env]]`, and responds with `result`.
pub(crate) fn spawn_tracker(
    cluster: &'static str,
    role: Option<&'static str>,
    env: Option<&'static str>,
    result: Value,
) -> Server {
    let server = Server::run();
    let responder = json_encoded(tracker_success(result));

    match (role, env) {
        (None, _) => server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/topologies"),
                request::query(url_decoded(contains(("cluster", cluster)))),
                request::query(url_decoded(not(contains(key("role"))))),
            ])
            .times(1)
            .respond_with(responder),
        ),

        (Some(role), None) => server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/topologies"),
                request::query(url_decoded(contains(("cluster", cluster)))),
                request::query(url_decoded(contains(("role", role)))),
                request::query(url_decoded(not(contains(key("environ"))))),
            ])
            .times(1)
            .respond_with(responder),
        ),

        (Some(role), Some(env)) => server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/topologies"),
                request::query(url_decoded(contains(("cluster", cluster)))),
                request::query(url_decoded(contains(("role", role)))),
                request::query(url_decoded(contains(("environ", env)))),
            ])
            .times(1)
            .respond_with(responder),
        ),
    }

    server
}

/// Spawns a tracker that must not receive any request.
pub(crate) fn spawn_idle_tracker() -> Server {
    Server::run()
}

/// Spawns a tracker that fails every `/topologies` request with `status`.
pub(crate) fn spawn_failing_tracker(status: u16) -> Server {
    let server = Server::run();

    server.expect(
        Expectation::matching(request::method_path("GET", "/topologies"))
            .times(1)
            .respond_with(status_code(status)),
    );

    server
}
