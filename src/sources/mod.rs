/*!
 * Script source implementations.
 *
 * Retrieval of script text is an external concern: the parser only ever
 * sees text that was already fetched. This module defines the seam the
 * engine loads through, so fetches can be sequenced and stale results
 * discarded without the engine knowing where the text comes from.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::SourceError;

/// Common trait for all script sources
///
/// A source delivers the complete raw script text once per fetch. The
/// engine treats the fetch as opaque and only sequences the results.
#[async_trait]
pub trait ScriptSource: Send + Sync + Debug {
    /// Fetch the raw script text
    ///
    /// # Returns
    /// * `Result<String, SourceError>` - The full script text or an error
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable description of the source, used in log lines
    fn description(&self) -> String;
}

/// A source backed by script text already held in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    content: String,
}

impl StaticSource {
    /// Create a source from in-memory script text
    pub fn new<N: Into<String>, C: Into<String>>(name: N, content: C) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The bundled demonstration script
    pub fn sample() -> Self {
        Self::new("bundled sample", SAMPLE_SCRIPT)
    }
}

#[async_trait]
impl ScriptSource for StaticSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.content.clone())
    }

    fn description(&self) -> String {
        format!("static source '{}'", self.name)
    }
}

/// Sample ASS script used by the demo source and the test suite
pub const SAMPLE_SCRIPT: &str = r#"[Script Info]
Title: Sample Video Subtitles
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&Hffffff,&Hffffff,&H0,&H80000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,Welcome to the ASS subtitle demo!
Dialogue: 0,0:00:04.00,0:00:06.50,Default,,0,0,0,,This video player supports Advanced SubStation Alpha format.
Dialogue: 0,0:00:07.00,0:00:09.00,Default,,0,0,0,,With proper timing and synchronization.
Dialogue: 0,0:00:09.50,0:00:11.00,Default,,0,0,0,,Enjoy the demonstration!
"#;

pub mod mock;
