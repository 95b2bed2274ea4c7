//! Server-issued session identifier

/// Conversation continuity token (Value Object)
///
/// Starts empty and is filled by the first successful response that carries an
/// identifier. After that it never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_established(&self) -> bool {
        self.id.is_some()
    }

    /// Store `id` unless an identifier is already set.
    ///
    /// Returns `true` if the identifier was stored by this call.
    pub fn set_once(&mut self, id: impl Into<String>) -> bool {
        if self.is_established() {
            return false;
        }
        self.id = Some(id.into());
        true
    }
}
