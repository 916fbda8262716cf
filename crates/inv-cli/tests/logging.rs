//! Logging setup writes structured events through the configured writer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use inv_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("capture lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn json_logging_respects_level_filter() {
    let capture = Capture::default();
    let mut config = LogConfig::default()
        .with_level(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    config.use_env_filter = false;
    init_logging_with_writer(&config, capture.clone());

    tracing::info!(target: "inv_cli", records = 3, "batch complete");
    tracing::debug!(target: "inv_cli", "hidden at info level");

    let text = String::from_utf8(capture.0.lock().expect("lock").clone()).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1, "{text}");
    let event: serde_json::Value = serde_json::from_str(lines[0]).expect("json line");
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "batch complete");
    assert_eq!(event["fields"]["records"], 3);
}
