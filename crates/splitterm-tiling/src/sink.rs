//! Side-effect seam between layout mutations and live sessions.

/// Receives the session-level consequences of a layout mutation.
///
/// Layout node ids double as session ids, so the sink is told which ids
/// to tear down and which pairs to exchange. Unknown ids must be no-ops.
pub trait SessionSink {
    fn kill(&mut self, id: &str);
    fn swap(&mut self, a: &str, b: &str);
}

/// Sink that discards every request, for layout-only tooling.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SessionSink for NullSink {
    fn kill(&mut self, _id: &str) {}
    fn swap(&mut self, _a: &str, _b: &str) {}
}

/// Sink that records requests in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub killed: Vec<String>,
    pub swapped: Vec<(String, String)>,
}

impl SessionSink for RecordingSink {
    fn kill(&mut self, id: &str) {
        self.killed.push(id.to_string());
    }

    fn swap(&mut self, a: &str, b: &str) {
        self.swapped.push((a.to_string(), b.to_string()));
    }
}
