//! Scheduling handles

use stats_view_domain::Dispatcher;

/// Dispatcher identified only by its name
///
/// The view-all factory never schedules work itself, it only hands these
/// through to the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDispatcher {
    name: String,
}

impl NamedDispatcher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Dispatcher for NamedDispatcher {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_passed_through() {
        assert_eq!(NamedDispatcher::new("ui").name(), "ui");
    }
}
