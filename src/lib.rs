/*!
 * # subsync - ASS subtitle parsing and playback synchronization
 *
 * A Rust library that turns raw Advanced SubStation Alpha (ASS) script text
 * into structured style and event records and, given a continuously
 * advancing playback clock, selects the caption that should be on screen.
 *
 * ## Features
 *
 * - Tolerant single-pass ASS script parser (styles and dialogue events)
 * - Hundredths-precision timecode handling (`H:MM:SS.CC`)
 * - Inline override-tag stripping for plain-text display
 * - Stateless active-caption selection safe under seeking
 * - Async script sources with stale-load protection
 * - Configurable engine (visibility default, fallback style, log level)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `script_parser`: ASS data model and the section/record parser
 * - `timecodes`: Timecode parsing and formatting utilities
 * - `text_cleaning`: Display-text normalization (break escapes, `{...}` tags)
 * - `synchronizer`: Active-caption selection from the sorted event list
 * - `engine`: Document ownership, visibility toggle and load sequencing
 * - `sources`: Async script retrieval seam and test doubles
 * - `playback`: Playback-surface collaborator interface
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the engine
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod engine;
pub mod errors;
pub mod playback;
pub mod script_parser;
pub mod sources;
pub mod synchronizer;
pub mod text_cleaning;
pub mod timecodes;

// Re-export main types for easier usage
pub use app_config::EngineConfig;
pub use engine::SubtitleEngine;
pub use errors::{EngineError, ScriptError, SourceError};
pub use playback::PlaybackClock;
pub use script_parser::{parse_script, CaptionEvent, ScriptDocument, StyleDefinition};
pub use sources::{ScriptSource, StaticSource};
pub use synchronizer::active_caption;
