#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chess_facade_backend::{config::Config, create_app};
use http_body_util::BodyExt;
use lichess_client::{Endpoints, LichessClient};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceExt; // for `oneshot` method

/// Canned lichess replies keyed by request path
#[derive(Default)]
pub struct StubLichess {
    replies: HashMap<String, (StatusCode, Value)>,
}

struct StubState {
    replies: HashMap<String, (StatusCode, Value)>,
    requested: Mutex<Vec<String>>,
}

/// A stub lichess listening on a local port
pub struct RunningStub {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubLichess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, path: &str, status: StatusCode, body: Value) -> Self {
        self.replies.insert(path.to_string(), (status, body));
        self
    }

    pub fn ok(self, path: &str, body: Value) -> Self {
        self.reply(path, StatusCode::OK, body)
    }

    pub async fn spawn(self) -> RunningStub {
        let state = Arc::new(StubState {
            replies: self.replies,
            requested: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .fallback(stub_reply)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub lichess");
        let addr = listener.local_addr().expect("read stub addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub lichess crashed");
        });

        RunningStub {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

impl RunningStub {
    /// Paths requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.state.requested.lock().unwrap().clone()
    }

    pub fn app(&self) -> axum::Router {
        app_against(&self.base_url)
    }
}

/// Unknown paths get a 404, like lichess does for unknown users
async fn stub_reply(State(state): State<Arc<StubState>>, uri: Uri) -> Response {
    state.requested.lock().unwrap().push(uri.path().to_string());
    match state.replies.get(uri.path()) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response(),
    }
}

/// Helper to create app with default test configuration
pub fn app_against(base_url: &str) -> axum::Router {
    let config = Config::default();
    create_app(
        LichessClient::new(Endpoints::new(base_url)),
        config.request_timeout,
    )
}

/// Helper to send a GET request and get the response
pub async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    // Try to parse as JSON, or return empty object
    let json = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

// =============================================================================
// FIXTURES
// =============================================================================

pub fn player_by_id() -> Value {
    json!({
        "id": "thibault",
        "username": "thibault",
        "perfs": {
            "bullet": { "games": 1543, "rating": 1614, "rd": 112, "prog": -13, "prov": false },
            "blitz": { "games": 6817, "rating": 1729, "rd": 65, "prog": 8 },
            "storm": { "runs": 69, "score": 61 }
        },
        "flair": "activity.lichess-horsey",
        "patron": true,
        "verified": true,
        "createdAt": 1290415680000u64,
        "profile": {
            "bio": "I turn coffee into bugs.",
            "realName": "Thibault Duplessis",
            "links": "github.com/ornicar",
            "flag": "FR"
        },
        "seenAt": 1752475985759u64,
        "playTime": { "total": 6408249, "tv": 17974 },
        "url": "https://lichess.org/@/thibault",
        "count": { "all": 12345 }
    })
}

pub fn user_performance() -> Value {
    json!({
        "user": { "name": "thibault" },
        "perf": { "glicko": { "rating": 1614.2, "deviation": 112.1 } },
        "rank": 42,
        "percentile": 12.3,
        "stat": {
            "resultStreak": {
                "win": { "cur": { "v": 0 }, "max": { "v": 16 } },
                "loss": { "cur": { "v": 2 }, "max": { "v": 5 } }
            }
        }
    })
}

pub fn leaderboard() -> Value {
    let bullet: Vec<Value> = (0..10)
        .map(|i| {
            let (id, username) = if i == 0 {
                ("ediz_gurel".to_string(), "Ediz_Gurel".to_string())
            } else {
                (format!("bullet{}", i), format!("Bullet{}", i))
            };
            json!({
                "id": id,
                "username": username,
                "perfs": { "bullet": { "rating": 3339 - i * 10, "progress": -37 + i } },
                "title": "GM"
            })
        })
        .collect();

    json!({
        "bullet": bullet,
        "blitz": [
            { "id": "blitzer", "username": "Blitzer", "perfs": { "blitz": { "rating": 3100, "progress": 4 } }, "online": true }
        ]
    })
}

/// `count` ranked players, the first being Ediz_Gurel
pub fn top_players(count: usize) -> Value {
    let users: Vec<Value> = (1..=count)
        .map(|rank| {
            if rank == 1 {
                json!({ "id": "ediz_gurel", "username": "Ediz_Gurel" })
            } else {
                json!({ "id": format!("player{}", rank), "username": format!("player{}", rank) })
            }
        })
        .collect();
    json!({ "users": users })
}

pub fn rating_history() -> Value {
    json!([
        { "name": "Blitz", "points": [[2012, 0, 3, 1650]] },
        { "name": "Bullet", "points": [[2011, 6, 8, 1472], [2011, 7, 29, 1332]] }
    ])
}
