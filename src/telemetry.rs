//! Tracing subscriber setup and per-operation spans.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ClientConfig;
use crate::domain::foundation::RequestId;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns an
/// error if a subscriber was already installed.
pub fn init(config: &ClientConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    }
}

/// Span wrapping one network-bound flow operation.
pub fn flow_span(flow: &'static str, operation: &'static str, request_id: RequestId) -> tracing::Span {
    tracing::info_span!(
        "flow",
        flow = flow,
        operation = operation,
        request.id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_span_can_be_entered_without_subscriber() {
        let span = flow_span("directory", "fetch", RequestId::new());
        let _entered = span.enter();
        tracing::debug!("inside span");
    }
}
