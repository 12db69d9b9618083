use std::sync::Mutex;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

/// A transient-message display mechanism
///
/// Purely side-effecting: no return value and no dependency on prior calls.
/// Implementations must accept empty strings and arbitrary text.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }
}

/// Notifier that records messages in memory instead of displaying them
///
/// Used by tests to assert on what the classifier and the view boundary
/// emitted.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notification emitted so far, in order
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Messages emitted with the given severity, in order
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}
