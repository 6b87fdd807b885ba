//! Local HTTP server imitating the annotation API
//!
//! Runs `tiny_http` on an ephemeral port in a background thread and records
//! every request it serves.

use std::io::Read as _;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use serde_json::{Value, json};
use tiny_http::{Header, Response, Server};

/// A request as the server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

type Responder = dyn Fn(&RecordedRequest) -> (u16, Value) + Send + Sync;

/// Mock annotation API server, stopped on drop
pub struct MockServer {
    base_url: String,
    server: Arc<Server>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockServer {
    /// Start a server answering with `respond`
    pub fn start(respond: impl Fn(&RecordedRequest) -> (u16, Value) + Send + Sync + 'static) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond: Arc<Responder> = Arc::new(respond);

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut raw = String::new();
                    request.as_reader().read_to_string(&mut raw).unwrap();

                    let recorded = RecordedRequest {
                        method: request.method().to_string(),
                        path: request.url().to_string(),
                        authorization: request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv("Authorization"))
                            .map(|h| h.value.to_string()),
                        body: serde_json::from_str(&raw).unwrap_or(Value::Null),
                    };

                    let (status, body) = respond(&recorded);
                    requests.lock().unwrap().push(recorded);

                    let response = Response::from_string(body.to_string())
                        .with_status_code(status)
                        .with_header(
                            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base_url: format!("http://{addr}/v1"),
            server,
            requests,
            handle: Some(handle),
        }
    }

    /// Server answering like the real API
    ///
    /// Task attachments containing `broken` are rejected with a 400.
    pub fn scale_like() -> Self {
        Self::start(scale_like_response)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Request paths, in arrival order
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Default routing of [`MockServer::scale_like`]
pub fn scale_like_response(request: &RecordedRequest) -> (u16, Value) {
    let body = &request.body;
    match request.path.as_str() {
        "/v1/projects" => (
            200,
            json!({
                "name": body["name"],
                "type": body["type"],
                "param_history": [{ "instruction": body["params"]["instruction"], "version": 0 }],
                "created_at": "2026-10-16T12:00:00.000Z",
            }),
        ),
        "/v1/batches" => (
            200,
            json!({
                "name": body["name"],
                "project": body["project"],
                "callback": body["callback"],
                "status": "staging",
            }),
        ),
        "/v1/task/imageannotation" => {
            let attachment = body["attachment"].as_str().unwrap_or_default();
            if attachment.contains("broken") {
                (400, json!({ "status_code": 400, "error": "Invalid attachment URL" }))
            } else {
                (
                    200,
                    json!({
                        "task_id": format!("task-{}", attachment.len()),
                        "status": "pending",
                        "type": "imageannotation",
                        "batch": body["batch"],
                        "params": {
                            "attachment": attachment,
                            "geometries": body["geometries"],
                        },
                    }),
                )
            }
        },
        _ => (404, json!({ "error": "Not found" })),
    }
}
