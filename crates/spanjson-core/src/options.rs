//! Parse configuration.

/// Knobs for [`parse_with`](crate::parse_with).
///
/// The default places no limit on nesting, so deeply nested input is bounded
/// only by the call stack. Hosts parsing untrusted text should set
/// `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Maximum number of open arrays/objects at any point. `Some(0)` rejects
    /// every container.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
