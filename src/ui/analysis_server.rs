use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::issue_analyzer::IssueAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;

const MAX_REQUEST_BODY_BYTES: u64 = 16 * 1024;
const INDEX_HTML: &str = include_str!("static/index.html");

pub struct AnalysisServer {
    analyzer: Arc<IssueAnalyzer>,
    addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server_handle: Option<JoinHandle<()>>,
}

impl AnalysisServer {
    pub fn new(analyzer: IssueAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            addr: None,
            shutdown_tx: None,
            server_handle: None,
        }
    }

    /// Binds and serves in the background. Port 0 picks a free port.
    pub async fn start(&mut self, host: &str, port: u16) -> AnalyzerResult<SocketAddr> {
        let requested = tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| AnalyzerError::network("address lookup", e))?
            .next()
            .ok_or_else(|| AnalyzerError::Configuration(format!("Cannot resolve {}:{}", host, port)))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (addr, server) = warp::serve(routes(Arc::clone(&self.analyzer)))
            .try_bind_with_graceful_shutdown(requested, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| AnalyzerError::network("server bind", e))?;

        self.addr = Some(addr);
        self.shutdown_tx = Some(shutdown_tx);
        self.server_handle = Some(tokio::spawn(server));

        log::info!("🌐 Analysis server listening on http://{}", addr);
        Ok(addr)
    }

    pub const fn addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    pub async fn shutdown(&mut self) -> AnalyzerResult<()> {
        log::info!("🛑 Shutting down analysis server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|()| {
                AnalyzerError::Configuration("Failed to send shutdown signal".to_string())
            })?;
        }

        if let Some(handle) = self.server_handle.take() {
            handle.await.map_err(|e| AnalyzerError::network("server shutdown", e))?;
        }

        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }
}

/// `GET /` serves the form, `POST /analyze` runs one analysis.
pub fn routes(analyzer: Arc<IssueAnalyzer>) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    let analyze = warp::path!("analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::json())
        .and(analyzer_filter)
        .and_then(analyze_handler);

    index
        .or(analyze)
        .recover(handle_rejection)
        .with(warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"]))
}

async fn analyze_handler(request: AnalysisRequest, analyzer: Arc<IssueAnalyzer>) -> Result<warp::reply::Response, Infallible> {
    match analyzer.analyze(&request).await {
        Ok(result) => Ok(warp::reply::json(&result).into_response()),
        Err(e) => {
            log::warn!("⚠️ Analysis of {}#{} failed: {}", request.repo_url, request.issue_number, e);
            Ok(error_reply(e.status_code(), &e.detail()))
        }
    }
}

fn error_reply(status: StatusCode, detail: &str) -> warp::reply::Response {
    warp::reply::with_status(warp::reply::json(&json!({ "detail": detail })), status).into_response()
}

async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    let reply = if err.is_not_found() {
        error_reply(StatusCode::NOT_FOUND, "Not Found")
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        error_reply(StatusCode::UNPROCESSABLE_ENTITY, &format!("Invalid request body: {}", e))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        error_reply(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        error_reply(StatusCode::LENGTH_REQUIRED, "Content-Length required")
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        error_reply(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected application/json")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        log::error!("❌ Unhandled rejection: {:?}", err);
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    };

    Ok(reply)
}
