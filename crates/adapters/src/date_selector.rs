//! Date selector adapter

use std::sync::Mutex;

use stats_view_domain::{DateSelector, DateSelectorFactory, StatsSection};

/// Date selector scoped to one stats section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDateSelector {
    section: StatsSection,
}

impl DateSelector for StatsDateSelector {
    fn section(&self) -> StatsSection {
        self.section
    }
}

/// Stub factory that records every section it was asked for
#[derive(Default)]
pub struct StubDateSelectorFactory {
    built: Mutex<Vec<StatsSection>>,
}

impl StubDateSelectorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections of all selectors built so far, oldest first
    pub fn built_sections(&self) -> Vec<StatsSection> {
        self.built
            .lock()
            .map(|built| built.clone())
            .unwrap_or_default()
    }
}

impl DateSelectorFactory for StubDateSelectorFactory {
    fn build(&self, section: StatsSection) -> Box<dyn DateSelector> {
        if let Ok(mut built) = self.built.lock() {
            built.push(section);
        }

        tracing::debug!(section = ?section, "Building date selector");

        Box::new(StatsDateSelector { section })
    }
}
