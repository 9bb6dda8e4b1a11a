/*!
 * Active-caption selection.
 *
 * The synchronizer is a pure function of the clock sample, the parsed event
 * list and the visibility toggle. It keeps no state between calls, so it is
 * safe under arbitrary, non-monotonic access (seeking backward or forward):
 * every call is a fresh scan over the same immutable list.
 */

use crate::script_parser::CaptionEvent;

/// Select the caption active at `time`, or `None`.
///
/// With `visible` false the answer is always `None`, independent of timing.
/// Otherwise the first event in stored order whose window contains `time`
/// (both bounds inclusive) wins; on overlaps this makes the tie-break
/// deterministic rather than an artifact of scan order.
pub fn active_caption<'a>(
    time: f64,
    events: &'a [CaptionEvent],
    visible: bool,
) -> Option<&'a CaptionEvent> {
    if !visible {
        return None;
    }

    for event in events {
        // The list is sorted by start time: nothing past this point can match
        if event.start_time > time {
            break;
        }
        if event.contains(time) {
            return Some(event);
        }
    }

    None
}
