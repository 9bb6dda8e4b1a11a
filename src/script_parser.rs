use std::fmt;
use std::str::FromStr;
use log::debug;

use crate::text_cleaning::clean_caption_text;
use crate::timecodes::{format_timecode, parse_timecode};

// @module: ASS script parsing and data model

// @const: Section and record markers recognized by the parser
const STYLES_HEADER: &str = "[V4+ Styles]";
const EVENTS_HEADER: &str = "[Events]";
const FORMAT_PREFIX: &str = "Format:";
const STYLE_PREFIX: &str = "Style:";
const DIALOGUE_PREFIX: &str = "Dialogue:";

// @struct: Named visual preset referenced by dialogue events
#[derive(Debug, Clone)]
pub struct StyleDefinition {
    // @field: Unique style key
    pub name: String,

    // @field: Font family name
    pub font_family: String,

    // @field: Font size in points
    pub font_size: f32,

    // @field: Colors in the script's own encoding, passed through opaquely
    pub primary_color: String,
    pub secondary_color: String,
    pub outline_color: String,
    pub back_color: String,

    // @field: Text decoration flags, raw value "1" means enabled
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,

    // @field: Horizontal/vertical scale percentages
    pub scale_x: f32,
    pub scale_y: f32,

    // @field: Letter spacing
    pub spacing: f32,

    // @field: Rotation angle in degrees
    pub rotation_angle: f32,

    // @field: Border style enum (1 outline+shadow, 3 opaque box)
    pub border_style: u32,

    // @field: Outline width and shadow depth
    pub outline_width: f32,
    pub shadow_depth: f32,

    // @field: Numpad-style alignment, 1-9
    pub alignment: u32,

    // @field: Margins in pixels
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_vertical: u32,

    // @field: Codepage id
    pub text_encoding: u32,
}

// @struct: One timed line of dialogue
#[derive(Debug, Clone)]
pub struct CaptionEvent {
    // @field: Start time in seconds
    pub start_time: f64,

    // @field: End time in seconds
    pub end_time: f64,

    // @field: Cleaned display text, may contain embedded line breaks
    pub text: String,

    // @field: Weak reference to a style name, resolved only at lookup time
    pub style_name: String,

    // @field: Render-order hint, unused by synchronization
    pub layer: i32,

    // @field: Per-event margin overrides
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_vertical: u32,

    // @field: Transition effect, passed through opaquely
    pub effect: String,
}

impl CaptionEvent {
    /// Duration of the event in seconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether the given playback position falls inside this event.
    /// Both bounds are inclusive.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

impl fmt::Display for CaptionEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} --> {} [{}] {}",
            format_timecode(self.start_time),
            format_timecode(self.end_time),
            self.style_name,
            self.text
        )
    }
}

/// Output of a script parse: the style table plus the event list,
/// sorted ascending by start time
#[derive(Debug, Default, Clone)]
pub struct ScriptDocument {
    /// Style definitions in appearance order
    pub styles: Vec<StyleDefinition>,

    /// Caption events, stable-sorted by start time
    pub events: Vec<CaptionEvent>,
}

impl ScriptDocument {
    /// Look up a style by name. Returns the first definition carrying the
    /// name when the script declares duplicates.
    pub fn style(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// Whether the document carries no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl fmt::Display for ScriptDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Script document")?;
        writeln!(f, "Styles: {}", self.styles.len())?;
        writeln!(f, "Events: {}", self.events.len())?;
        Ok(())
    }
}

// @enum: Current section while scanning the script line by line
#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Styles,
    Events,
}

// Transient positional record decoded against a Format: declaration.
// Fields are looked up by declared name; absent or unparseable values fall
// back to the documented defaults instead of failing the record.
struct RecordFields<'a> {
    names: &'a [String],
    values: Vec<&'a str>,
}

impl<'a> RecordFields<'a> {
    // @creates: Positional split, or None when the record is short
    fn split(names: &'a [String], record: &'a str) -> Option<Self> {
        let values: Vec<&str> = record.split(',').collect();
        if values.len() < names.len() {
            return None;
        }
        Some(Self { names, values })
    }

    fn index_of(&self, field: &str) -> Option<usize> {
        self.names.iter().position(|name| name == field)
    }

    fn value(&self, field: &str) -> Option<&'a str> {
        self.index_of(field)
            .and_then(|idx| self.values.get(idx))
            .map(|value| value.trim())
    }

    fn text_or(&self, field: &str, default: &str) -> String {
        self.value(field)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    fn number_or<T: FromStr>(&self, field: &str, default: T) -> T {
        self.value(field)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    fn flag(&self, field: &str) -> bool {
        self.value(field) == Some("1")
    }

    // The text field consumes everything from its declared position to the
    // end of the line, rejoined with commas -- caption text may itself
    // contain commas and is never split further.
    fn remainder(&self, field: &str) -> String {
        match self.index_of(field) {
            Some(idx) if idx < self.values.len() => self.values[idx..].join(","),
            _ => String::new(),
        }
    }
}

/// Parse raw ASS script text into a [`ScriptDocument`].
///
/// Never fails: malformed records are dropped one at a time and unrecognized
/// sections and lines are ignored, so the worst case is an empty document.
pub fn parse_script(raw: &str) -> ScriptDocument {
    let mut styles = Vec::new();
    let mut events = Vec::new();

    let mut section = Section::None;
    let mut style_format: Vec<String> = Vec::new();
    let mut event_format: Vec<String> = Vec::new();
    let mut dropped = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed == STYLES_HEADER {
            section = Section::Styles;
            continue;
        }
        if trimmed == EVENTS_HEADER {
            section = Section::Events;
            continue;
        }
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            // Unrecognized section: skip its lines until the next known header
            section = Section::None;
            continue;
        }

        match section {
            Section::Styles => {
                if let Some(declaration) = trimmed.strip_prefix(FORMAT_PREFIX) {
                    style_format = split_format_declaration(declaration);
                } else if let Some(record) = trimmed.strip_prefix(STYLE_PREFIX) {
                    match RecordFields::split(&style_format, record) {
                        Some(fields) => styles.push(style_from_record(&fields)),
                        None => {
                            dropped += 1;
                            debug!("Dropping short style record: {}", trimmed);
                        }
                    }
                }
            }
            Section::Events => {
                if let Some(declaration) = trimmed.strip_prefix(FORMAT_PREFIX) {
                    event_format = split_format_declaration(declaration);
                } else if let Some(record) = trimmed.strip_prefix(DIALOGUE_PREFIX) {
                    let event = RecordFields::split(&event_format, record)
                        .and_then(|fields| event_from_record(&fields));
                    match event {
                        Some(event) => events.push(event),
                        None => {
                            dropped += 1;
                            debug!("Dropping malformed dialogue record: {}", trimmed);
                        }
                    }
                }
            }
            Section::None => {}
        }
    }

    // Stable sort: events sharing a start time keep their appearance order
    events.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    debug!(
        "Parsed script: {} styles, {} events, {} dropped records",
        styles.len(),
        events.len(),
        dropped
    );

    ScriptDocument { styles, events }
}

fn split_format_declaration(declaration: &str) -> Vec<String> {
    declaration
        .split(',')
        .map(|field| field.trim().to_string())
        .collect()
}

fn style_from_record(fields: &RecordFields) -> StyleDefinition {
    StyleDefinition {
        name: fields.text_or("Name", "Default"),
        font_family: fields.text_or("Fontname", "Arial"),
        font_size: fields.number_or("Fontsize", 20.0),
        primary_color: fields.text_or("PrimaryColour", "&Hffffff"),
        secondary_color: fields.text_or("SecondaryColour", "&Hffffff"),
        outline_color: fields.text_or("OutlineColour", "&H0"),
        back_color: fields.text_or("BackColour", "&H0"),
        bold: fields.flag("Bold"),
        italic: fields.flag("Italic"),
        underline: fields.flag("Underline"),
        strike_out: fields.flag("StrikeOut"),
        scale_x: fields.number_or("ScaleX", 100.0),
        scale_y: fields.number_or("ScaleY", 100.0),
        spacing: fields.number_or("Spacing", 0.0),
        rotation_angle: fields.number_or("Angle", 0.0),
        border_style: fields.number_or("BorderStyle", 1),
        outline_width: fields.number_or("Outline", 2.0),
        shadow_depth: fields.number_or("Shadow", 0.0),
        alignment: fields.number_or("Alignment", 2),
        margin_left: fields.number_or("MarginL", 0),
        margin_right: fields.number_or("MarginR", 0),
        margin_vertical: fields.number_or("MarginV", 0),
        text_encoding: fields.number_or("Encoding", 1),
    }
}

// @returns: None when the start or end timecode fails to parse; the record
// is dropped entirely rather than stored with a sentinel time
fn event_from_record(fields: &RecordFields) -> Option<CaptionEvent> {
    let start_time = parse_timecode(&fields.text_or("Start", ""));
    let end_time = parse_timecode(&fields.text_or("End", ""));
    if start_time.is_nan() || end_time.is_nan() {
        return None;
    }

    Some(CaptionEvent {
        start_time,
        end_time,
        text: clean_caption_text(&fields.remainder("Text")),
        style_name: fields.text_or("Style", "Default"),
        layer: fields.number_or("Layer", 0),
        margin_left: fields.number_or("MarginL", 0),
        margin_right: fields.number_or("MarginR", 0),
        margin_vertical: fields.number_or("MarginV", 0),
        effect: fields.text_or("Effect", ""),
    })
}
