//! Console Layer
//!
//! Formats each event into a single line, records it in the [`LogBuffer`]
//! and forwards it to the browser console (stderr off wasm).

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::LogBuffer;

#[derive(Debug, Clone)]
pub struct ConsoleLayer {
    buffer: LogBuffer,
    app_name: String,
}

impl ConsoleLayer {
    pub fn new(app_name: impl Into<String>, buffer: LogBuffer) -> Self {
        Self {
            buffer,
            app_name: app_name.into(),
        }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} {:>5} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level().as_str(),
            self.app_name,
            meta.target(),
            visitor.finish(),
        );
        emit(meta.level(), &line);
        self.buffer.push(line);
    }
}

/// Collects `message` plus `key=value` pairs
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match *level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{line}");
}
