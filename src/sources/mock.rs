/*!
 * Mock script sources for testing.
 *
 * This module provides mock sources that simulate different behaviors:
 * - `MockSource::working()` - Always delivers the given script text
 * - `MockSource::slow()` - Delivers after a delay (for stale-load testing)
 * - `MockSource::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::SourceError;
use crate::sources::ScriptSource;

/// Behavior mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always delivers the configured script text
    Working,
    /// Delivers the configured text after a delay
    Slow { delay_ms: u64 },
    /// Always fails with a fetch error
    Failing,
    /// Delivers an empty payload
    Empty,
}

/// Mock source for testing load behavior
#[derive(Debug)]
pub struct MockSource {
    /// Behavior mode
    behavior: MockBehavior,
    /// Script text delivered by working modes
    content: String,
    /// Number of fetches observed
    fetch_count: Arc<AtomicUsize>,
}

impl MockSource {
    /// Create a mock source with the specified behavior
    pub fn new<C: Into<String>>(behavior: MockBehavior, content: C) -> Self {
        Self {
            behavior,
            content: content.into(),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source that always delivers `content`
    pub fn working<C: Into<String>>(content: C) -> Self {
        Self::new(MockBehavior::Working, content)
    }

    /// A source that delivers `content` after `delay_ms` milliseconds
    pub fn slow<C: Into<String>>(content: C, delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms }, content)
    }

    /// A source that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing, String::new())
    }

    /// A source that delivers an empty payload
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty, String::new())
    }

    /// How many times this source has been fetched
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScriptSource for MockSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(self.content.clone()),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(self.content.clone())
            }
            MockBehavior::Failing => {
                Err(SourceError::FetchFailed("mock source configured to fail".to_string()))
            }
            MockBehavior::Empty => Ok(String::new()),
        }
    }

    fn description(&self) -> String {
        format!("mock source ({:?})", self.behavior)
    }
}
