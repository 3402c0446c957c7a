//! JSON Event Sink
//!
//! Outputs apply events as NDJSON for scripting.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::ApplyResult;
use crate::domain::ports::{ApplyEvent, ApplyEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn result_json(index: usize, result: &ApplyResult) -> serde_json::Value {
    let op = &result.operation;
    serde_json::json!({
        "event": "item",
        "index": index,
        "kind": op.kind().as_str(),
        "source": op.source().map(|p| p.display().to_string()),
        "target": op.target().map(|p| p.display().to_string()),
        "status": result.status.as_str(),
        "message": result.message,
    })
}

impl ApplyEventSink for JsonEventSink {
    fn on_event(&self, event: ApplyEvent) {
        let json = match event {
            ApplyEvent::Started {
                root,
                operation_count,
            } => serde_json::json!({
                "event": "start",
                "root": root.display().to_string(),
                "operation_count": operation_count,
            }),

            ApplyEvent::TempRename { source, temp } => serde_json::json!({
                "event": "temp_rename",
                "source": source.display().to_string(),
                "temp": temp.display().to_string(),
            }),

            ApplyEvent::OperationFinished { index, result } => result_json(index, &result),

            ApplyEvent::Completed {
                ok_count,
                skipped_count,
                error_count,
            } => {
                let status = if error_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "status": status,
                    "ok": ok_count,
                    "skipped": skipped_count,
                    "errors": error_count,
                })
            }
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Operation;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buf: &SharedBuf) -> Vec<serde_json::Value> {
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn writes_one_json_object_per_event() {
        let buf = SharedBuf::default();
        let sink = JsonEventSink::with_writer(buf.clone());

        sink.on_event(ApplyEvent::Started {
            root: PathBuf::from("/clips"),
            operation_count: 1,
        });
        sink.on_event(ApplyEvent::OperationFinished {
            index: 0,
            result: ApplyResult::ok(Operation::move_entry("/clips/a", "/clips/b", false)),
        });
        sink.on_event(ApplyEvent::Completed {
            ok_count: 1,
            skipped_count: 0,
            error_count: 0,
        });

        let events = lines(&buf);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[1]["kind"], "move");
        assert_eq!(events[1]["source"], "/clips/a");
        assert_eq!(events[1]["status"], "ok");
        assert_eq!(events[2]["status"], "success");
    }

    #[test]
    fn errors_mark_completion_partial() {
        let buf = SharedBuf::default();
        let sink = JsonEventSink::with_writer(buf.clone());
        sink.on_event(ApplyEvent::Completed {
            ok_count: 0,
            skipped_count: 0,
            error_count: 1,
        });
        assert_eq!(lines(&buf)[0]["status"], "partial");
    }
}
