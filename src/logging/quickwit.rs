use crate::logging::consts::{DEFAULT_LOGGING_BATCH_SIZE, QUICKWIT_LOGGING_CHANNEL_CAPACITY};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use tokio::sync::mpsc;
use tokio::task;
use tracing::field::{Field, Visit};
use tracing_core::Event;
use tracing_core::Subscriber;
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

/// Routes events carrying a marker field to Quickwit indexes, one index per
/// marker value. Events without a mapped marker are ignored by this layer.
pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
    batch_size: usize,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: String::new(),
            marker_to_index: HashMap::new(),
            batch_size: DEFAULT_LOGGING_BATCH_SIZE,
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    pub fn map_marker_to_index(mut self, marker_value: &str, index_id: &str) -> Self {
        self.marker_to_index
            .insert(marker_value.to_string(), index_id.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Spawns the shipping task, so this must run inside a Tokio runtime.
    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_LOGGING_CHANNEL_CAPACITY);
        let index_ids = self.marker_to_index.values().cloned().collect();
        task::spawn(ship_logs(
            self.quickwit_url,
            receiver,
            self.batch_size,
            index_ids,
        ));
        QuickwitLoggingLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<QuickwitLogMessage>,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
}

impl QuickwitLoggingLayer {
    fn index_for(&self, event: &Event<'_>) -> Option<String> {
        let mut visitor = MarkerVisitor::new(&self.marker_field);
        event.record(&mut visitor);
        visitor
            .marker_value
            .and_then(|value| self.marker_to_index.get(&value).cloned())
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        if let Some(index_id) = self.index_for(event) {
            let mut visitor = LogVisitor::new();
            event.record(&mut visitor);
            // Dropping logs is preferable to stalling request handling when the channel is full.
            let _ = self.sender.try_send(QuickwitLogMessage {
                index_id,
                log: visitor.log,
            });
        }
    }
}

async fn ship_logs(
    quickwit_url: Url,
    mut receiver: mpsc::Receiver<QuickwitLogMessage>,
    batch_size: usize,
    index_ids: Vec<String>,
) {
    let http_client = Client::new();
    let mut buffers: HashMap<String, Vec<_>> = index_ids
        .into_iter()
        .map(|index_id| (index_id, Vec::with_capacity(batch_size)))
        .collect();
    while let Some(QuickwitLogMessage { index_id, log }) = receiver.recv().await {
        let Some(buffer) = buffers.get_mut(&index_id) else {
            continue;
        };
        buffer.push(log);
        if buffer.len() >= batch_size {
            flush(&http_client, &quickwit_url, &index_id, buffer).await;
        }
    }
    for (index_id, buffer) in buffers.iter_mut() {
        flush(&http_client, &quickwit_url, index_id, buffer).await;
    }
}

async fn flush(
    http_client: &Client,
    quickwit_url: &Url,
    index_id: &str,
    buffer: &mut Vec<serde_json::Map<String, serde_json::Value>>,
) {
    if buffer.is_empty() {
        return;
    }
    let mut ndjson_body = Vec::new();
    for log in buffer.drain(..) {
        if let Err(err) = serialize_to_ndjson(&mut ndjson_body, &log) {
            eprintln!("[quickwit]: failed to serialize a log line: {err}");
        }
    }
    let ingest_url = format!("{quickwit_url}api/v1/{index_id}/ingest");
    let sent = http_client
        .post(&ingest_url)
        .body(ndjson_body)
        .send()
        .await
        .and_then(|response| response.error_for_status());
    if let Err(err) = sent {
        // Reporting through `tracing` here would feed back into this very layer.
        eprintln!("[quickwit]: failed to ingest logs into {index_id}: {err}");
    }
}

struct MarkerVisitor {
    marker_field: String,
    marker_value: Option<String>,
}

impl MarkerVisitor {
    pub fn new(marker_field: &str) -> Self {
        Self {
            marker_field: marker_field.to_string(),
            marker_value: None,
        }
    }
}

impl Visit for MarkerVisitor {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.marker_field {
            self.marker_value = Some(value.to_string());
        }
    }
}

struct LogVisitor {
    log: serde_json::Map<String, serde_json::Value>,
}

impl LogVisitor {
    pub fn new() -> Self {
        Self {
            log: serde_json::Map::new(),
        }
    }
}

impl Visit for LogVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        // Non-finite floats have no JSON representation.
        if let Some(number) = serde_json::Number::from_f64(value) {
            self.log.insert(field.name().to_string(), number.into());
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        // Quickwit stores u64 at most.
        let value = u64::try_from(value).unwrap_or(u64::MAX);
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.log
            .insert(field.name().to_string(), format!("{:?}", value).into());
    }
}

#[derive(Debug, Serialize)]
struct QuickwitLogMessage {
    index_id: String,
    log: serde_json::Map<String, serde_json::Value>,
}

fn serialize_to_ndjson<W, V>(mut writer: W, value: &V) -> io::Result<()>
where
    W: io::Write,
    V: ?Sized + Serialize,
{
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_ndjson_lines_end_with_newline() {
        let mut body = Vec::new();
        let mut log = serde_json::Map::new();
        log.insert(String::from("task"), "proximity_query".into());
        log.insert(String::from("matches"), 3.into());

        serialize_to_ndjson(&mut body, &log).unwrap();
        serialize_to_ndjson(&mut body, &log).unwrap();

        let text = String::from_utf8(body).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(line).unwrap();
            assert_eq!(parsed, log);
        }
    }

    #[tokio::test]
    async fn test_only_mapped_markers_are_forwarded() {
        let (sender, mut receiver) = mpsc::channel(8);
        let layer = QuickwitLoggingLayer {
            sender,
            marker_field: String::from("task"),
            marker_to_index: HashMap::from([(
                String::from("proximity_query"),
                String::from("proximity_queries"),
            )]),
        };
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(task = "proximity_query", radius_km = 2.5, matches = 4_u64);
            tracing::info!(task = "something_else", matches = 1_u64);
            tracing::info!("no marker at all");
        });

        let message = receiver.try_recv().unwrap();
        assert_eq!(message.index_id, "proximity_queries");
        assert_eq!(message.log["radius_km"], serde_json::json!(2.5));
        assert_eq!(message.log["matches"], serde_json::json!(4));
        assert!(receiver.try_recv().is_err());
    }
}
