use splitterm_session::SessionManager;
use splitterm_tiling::SessionSink;

/// Forwards layout side effects to the session manager.
pub struct SessionBridge<'a> {
    sessions: &'a mut SessionManager,
}

impl<'a> SessionBridge<'a> {
    pub fn new(sessions: &'a mut SessionManager) -> Self {
        Self { sessions }
    }
}

impl SessionSink for SessionBridge<'_> {
    fn kill(&mut self, id: &str) {
        self.sessions.kill(id);
    }

    fn swap(&mut self, a: &str, b: &str) {
        self.sessions.swap(a, b);
    }
}
