//! Test utilities for advice service consumers
//!
//! Provides a scripted [`FakeAdviceService`] and a one-shot canned HTTP
//! server for exercising [`crate::AdviceClient`] against real sockets.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use aidhf_core::{Error, Result, SymptomRecord};

use crate::service::AdviceService;

/// Advice service that replays scripted responses and records every request.
///
/// When the script runs out, calls fail with a submission error.
#[derive(Debug, Default)]
pub struct FakeAdviceService {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<SymptomRecord>>,
    latency: Option<Duration>,
}

impl FakeAdviceService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_advice(self, advice: impl Into<String>) -> Self {
        self.push(Ok(advice.into()));
        self
    }

    /// Queue a failed response.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Err(Error::submission(message)));
        self
    }

    /// Delay every response, to keep a request in flight.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Records received so far, in order.
    pub fn requests(&self) -> Vec<SymptomRecord> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, response: Result<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    fn next_response(&self, record: &SymptomRecord) -> Result<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*record);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(Error::submission("no scripted response")))
    }
}

impl AdviceService for FakeAdviceService {
    async fn get_advice(&self, record: &SymptomRecord) -> Result<String> {
        let response = self.next_response(record);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        response
    }
}

/// Accept a single HTTP connection and answer it with a canned response.
///
/// `status` is the status line tail, e.g. `"200 OK"`. The raw request text is
/// delivered through the returned receiver once the response is written.
pub async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (SocketAddr, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind canned server");
    let addr = listener.local_addr().expect("canned server address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept connection");
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = stream.shutdown().await;
        let _ = tx.send(request);
    });

    (addr, rx)
}

/// An address nothing is listening on.
pub async fn unused_local_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    listener.local_addr().expect("probe address")
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..head_end]);
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
