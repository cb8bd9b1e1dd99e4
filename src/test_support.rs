//! Stand-in backend and frontend servers on ephemeral ports.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// How the backend answers the `/auth/register` preflight.
#[derive(Clone, Copy, Debug)]
pub enum Cors {
    /// tower-http layer allowing the frontend origin
    Frontend,
    /// 405 carrying an allow-origin for some other site
    Foreign,
    Off,
}

#[derive(Clone, Copy, Debug)]
pub struct BackendBehaviour {
    pub root_status: StatusCode,
    pub docs_status: StatusCode,
    pub redoc_status: StatusCode,
    pub cors: Cors,
}

impl Default for BackendBehaviour {
    fn default() -> Self {
        Self {
            root_status: StatusCode::OK,
            docs_status: StatusCode::OK,
            redoc_status: StatusCode::OK,
            cors: Cors::Frontend,
        }
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Returns the base URL, without trailing slash.
pub async fn spawn_backend(behaviour: BackendBehaviour) -> String {
    let BackendBehaviour {
        root_status,
        docs_status,
        redoc_status,
        cors,
    } = behaviour;
    let register = post(|| async { StatusCode::CREATED });
    let register = match cors {
        Cors::Foreign => register.options(|| async {
            (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "http://elsewhere.example")],
            )
        }),
        Cors::Frontend | Cors::Off => register,
    };
    let app = Router::new()
        .route("/", get(move || async move { (root_status, "{\"message\": \"InnerCalm API\"}") }))
        .route("/docs", get(move || async move { (docs_status, "swagger") }))
        .route("/redoc", get(move || async move { (redoc_status, "redoc") }))
        .route("/auth/register", register);
    let app = match cors {
        Cors::Frontend => app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://localhost:3000")))
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        ),
        Cors::Foreign | Cors::Off => app,
    };
    serve(app).await
}

pub async fn spawn_frontend(status: StatusCode) -> String {
    let app = Router::new().route("/", get(move || async move { (status, "<html></html>") }));
    serve(app).await
}

/// A port nothing listens on, so connections are refused.
pub async fn dead_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

/// Accepts connections and never answers.
pub async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    format!("http://{addr}")
}

/// Answers every request with a 200 head promising 100 body bytes, sends 7 and stalls.
pub async fn stalled_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                continue;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                let _ = stream
                    .write_all(
                        b"HTTP/1.1 200 OK\r\n\
                          content-length: 100\r\n\
                          access-control-allow-origin: *\r\n\
                          \r\n\
                          partial",
                    )
                    .await;
                tokio::time::sleep(Duration::from_secs(3600)).await;
                drop(stream);
            });
        }
    });
    format!("http://{addr}")
}
