/*!
 * Display-text normalization for caption events.
 *
 * Raw ASS dialogue text carries inline override blocks (`{\an8}`, `{\i1}`,
 * ...) and two-character break escapes (`\N` hard break, `\n` soft break).
 * For plain display both escapes become real line breaks and every override
 * block is removed. The transform is lossy: override tags are discarded,
 * not preserved for re-rendering.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// Matches one override block up to the nearest `}`. Nested braces are not
// supported and fall out as two separate blocks.
static OVERRIDE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[^}]*\}").unwrap()
});

/// Clean raw dialogue text for plain display.
///
/// Break escapes are replaced with `\n`, override blocks are stripped in
/// appearance order, and the result is trimmed. Idempotent on text that is
/// already clean.
pub fn clean_caption_text(raw: &str) -> String {
    let unescaped = raw.replace("\\N", "\n").replace("\\n", "\n");
    let stripped = OVERRIDE_BLOCK_REGEX.replace_all(&unescaped, "");
    stripped.trim().to_string()
}
