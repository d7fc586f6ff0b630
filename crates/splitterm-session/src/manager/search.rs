//! Search navigation and selection queries.

use crate::handle::SearchMatch;

use super::SessionManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Forward,
    Backward,
}

impl SessionManager {
    /// Move the view's search cursor to the next match of `needle`.
    ///
    /// Returns `true` exactly when the move wrapped from the end of the
    /// scrollback back to the start.
    pub fn find_next(&mut self, id: &str, needle: &str) -> bool {
        self.find(id, needle, Heading::Forward)
    }

    /// Like [`find_next`](Self::find_next), walking backwards; `true` when
    /// the move wrapped from the start to the end.
    pub fn find_previous(&mut self, id: &str, needle: &str) -> bool {
        self.find(id, needle, Heading::Backward)
    }

    fn find(&mut self, id: &str, needle: &str, heading: Heading) -> bool {
        let Some(session) = self.sessions.get_mut(id) else {
            return false;
        };
        let Some(view) = session.view.as_mut() else {
            return false;
        };
        let before = view.search_cursor();
        let hit = match heading {
            Heading::Forward => view.find_next(needle),
            Heading::Backward => view.find_previous(needle),
        };
        let Some(hit) = hit else {
            return false;
        };
        session.scroll_y = hit.line;
        before.is_some_and(|from| wrapped(heading, from, hit))
    }

    pub fn selection(&self, id: &str) -> Option<String> {
        self.view(id)?.selection()
    }

    pub fn has_selection(&self, id: &str) -> bool {
        self.view(id).is_some_and(|v| v.has_selection())
    }
}

fn wrapped(heading: Heading, from: SearchMatch, to: SearchMatch) -> bool {
    match heading {
        Heading::Forward => to <= from,
        Heading::Backward => to >= from,
    }
}
