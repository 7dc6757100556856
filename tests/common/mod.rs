#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use payment_intent_function::dtos::PaymentIntentResult;
use payment_intent_function::processor::{
    CreatedPaymentIntent, NewPaymentIntent, PaymentProcessor, ProcessorError,
};
use payment_intent_function::{build_router, AppState};
use tower::util::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub enum Outcome {
    Created { id: &'static str, client_secret: &'static str },
    Rejected(&'static str),
}

/// Records every intent it is asked to create and answers with a scripted outcome.
pub struct FakeProcessor {
    outcome: Outcome,
    calls: Mutex<Vec<NewPaymentIntent>>,
}

impl FakeProcessor {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<NewPaymentIntent> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for FakeProcessor {
    async fn create_payment_intent(
        &self,
        intent: NewPaymentIntent,
    ) -> Result<CreatedPaymentIntent, ProcessorError> {
        self.calls.lock().unwrap().push(intent);
        match &self.outcome {
            Outcome::Created { id, client_secret } => Ok(CreatedPaymentIntent {
                id: id.to_string(),
                client_secret: client_secret.to_string(),
            }),
            Outcome::Rejected(message) => Err(ProcessorError::Rejected(message.to_string())),
        }
    }
}

pub fn app(processor: Arc<FakeProcessor>) -> Router {
    build_router(AppState::new(processor))
}

pub async fn post(app: Router, body: impl Into<Body>) -> (StatusCode, PaymentIntentResult) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_json(app: Router, body: serde_json::Value) -> (StatusCode, PaymentIntentResult) {
    post(app, body.to_string()).await
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's events at INFO and above into a buffer until the
/// guard drops. `#[tokio::test]` runs on the current thread, so the
/// handler's events land here.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
