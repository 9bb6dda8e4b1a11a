use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

use crate::app_config::EngineConfig;
use crate::errors::EngineError;
use crate::playback::PlaybackClock;
use crate::script_parser::{parse_script, CaptionEvent, ScriptDocument, StyleDefinition};
use crate::sources::ScriptSource;
use crate::synchronizer::active_caption;

// @module: Engine controller owning the live document

/// Main engine facade for subtitle playback
///
/// Owns the live [`ScriptDocument`] and the user-facing visibility toggle.
/// The document is shared read-only: re-parsing replaces it wholesale with
/// an atomic swap, so readers holding an older snapshot are unaffected.
pub struct SubtitleEngine {
    // @field: Engine configuration
    config: EngineConfig,

    // @field: Live document snapshot, replaced wholesale on re-parse
    document: RwLock<Arc<ScriptDocument>>,

    // @field: User-facing caption toggle
    visible: AtomicBool,

    // @field: Monotonic ticket dispenser sequencing load requests
    load_generation: AtomicU64,
}

impl SubtitleEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    // @method: Create an engine with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let visible = config.captions_visible;
        Self {
            config,
            document: RwLock::new(Arc::new(ScriptDocument::default())),
            visible: AtomicBool::new(visible),
            load_generation: AtomicU64::new(0),
        }
    }

    /// Parse raw script text and install it as the live document
    pub fn load_script(&self, raw: &str) -> Arc<ScriptDocument> {
        // Takes a ticket so an older fetch still in flight cannot clobber this
        let _ticket = self.next_ticket();
        self.install(parse_script(raw))
    }

    /// Fetch script text from `source`, then parse and install it
    ///
    /// Loads are sequenced on the most recently requested source only: if a
    /// newer load is requested while this fetch is in flight, the late
    /// result is discarded with [`EngineError::StaleLoad`] and the newer
    /// document stays installed.
    pub async fn load_from(&self, source: &dyn ScriptSource) -> Result<Arc<ScriptDocument>, EngineError> {
        let ticket = self.next_ticket();
        debug!("Load {} requested from {}", ticket, source.description());

        let raw = source.fetch().await?;

        if self.load_generation.load(Ordering::SeqCst) != ticket {
            debug!(
                "Load {} superseded, discarding result from {}",
                ticket,
                source.description()
            );
            return Err(EngineError::StaleLoad);
        }

        Ok(self.install(parse_script(&raw)))
    }

    fn next_ticket(&self) -> u64 {
        self.load_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn install(&self, document: ScriptDocument) -> Arc<ScriptDocument> {
        let document = Arc::new(document);
        info!(
            "Installed script: {} styles, {} events",
            document.styles.len(),
            document.events.len()
        );
        *self.document.write() = document.clone();
        document
    }

    /// Snapshot of the live document
    pub fn document(&self) -> Arc<ScriptDocument> {
        self.document.read().clone()
    }

    /// Turn captions on or off
    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }

    /// Flip the caption toggle, returning the new state
    pub fn toggle_visibility(&self) -> bool {
        !self.visible.fetch_xor(true, Ordering::SeqCst)
    }

    /// Whether captions are currently enabled
    pub fn visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// The caption active at `time`, honoring the visibility toggle
    pub fn active_caption(&self, time: f64) -> Option<CaptionEvent> {
        let document = self.document.read();
        active_caption(time, &document.events, self.visible()).cloned()
    }

    /// Per-tick query driven by the playback surface
    pub fn tick(&self, clock: &dyn PlaybackClock) -> Option<CaptionEvent> {
        self.active_caption(clock.position())
    }

    /// Resolve the style for an event, falling back to the configured
    /// default style when the event references an unknown name
    pub fn style_for(&self, event: &CaptionEvent) -> Option<StyleDefinition> {
        let document = self.document.read();
        document
            .style(&event.style_name)
            .or_else(|| document.style(&self.config.default_style))
            .cloned()
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for SubtitleEngine {
    fn default() -> Self {
        Self::new()
    }
}
