//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the tabfix verbosity system.
//!
//! [`DiagnosticLayer`] intercepts events whose target starts with
//! `tabfix::`, maps the trailing component to an [`InfoFlag`], and records the
//! formatted message in the thread-local event buffer when the current
//! [`VerbosityConfig`] enables that flag. Events for other targets are ignored.
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(4));
//! tracing::info!(target: "tabfix::visit", "src/main.c");
//! ```

use super::config::VerbosityConfig;
use super::levels::InfoFlag;
use super::thread_local::{emit_info, info_gte};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// Prefix shared by every tabfix tracing target.
pub const TARGET_PREFIX: &str = "tabfix::";

/// A tracing layer that routes tabfix events into the diagnostic buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiagnosticLayer {
    _private: (),
}

impl DiagnosticLayer {
    /// Create a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        let name = target.strip_prefix(TARGET_PREFIX)?;
        InfoFlag::ALL.into_iter().find(|flag| flag.name() == name)
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(flag) = Self::target_to_info_flag(metadata.target()) else {
            return;
        };
        let level = Self::level_to_verbosity_level(metadata.level());
        if !info_gte(flag, level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            emit_info(flag, level, message);
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Initialize tracing with the given verbosity configuration.
///
/// The configuration is stored for the calling thread. The global subscriber
/// is installed on the first call only; later calls (for example from
/// several in-process runs in tests) just replace the thread's
/// configuration.
pub fn init_tracing(config: VerbosityConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config);

    let _ = tracing_subscriber::registry()
        .with(DiagnosticLayer::new())
        .try_init();
}
