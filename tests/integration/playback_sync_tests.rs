/*!
 * End-to-end playback synchronization tests
 *
 * Drives the engine the way a playback surface would: load a script, tick
 * the clock, seek around and toggle captions.
 */

use subsync::engine::SubtitleEngine;
use subsync::playback::{MockClock, PlaybackClock};
use subsync::sources::StaticSource;
use crate::common;

/// Test the sample-script scenario at fixed sampling points
#[test]
fn test_playback_withSampleScript_shouldSelectExpectedCaptions() {
    let engine = SubtitleEngine::new();
    engine.load_script(common::sample_script());

    let mut clock = MockClock::new(30.0);

    // t=3.5 falls in the gap between the first and second events
    clock.seek(3.5);
    assert!(engine.tick(&clock).is_none());

    clock.seek(4.2);
    let caption = engine.tick(&clock).unwrap();
    assert_eq!(
        caption.text,
        "This video player supports Advanced SubStation Alpha format."
    );

    clock.seek(10.0);
    let caption = engine.tick(&clock).unwrap();
    assert_eq!(caption.text, "Enjoy the demonstration!");
}

/// Test continuous playback ticks covering every caption window once
#[test]
fn test_playback_withContinuousTicks_shouldTrackCaptionWindows() {
    let engine = SubtitleEngine::new();
    engine.load_script(common::sample_script());

    let mut clock = MockClock::new(12.0);
    clock.play();

    let mut seen: Vec<String> = Vec::new();
    while clock.position() < clock.duration() {
        if let Some(caption) = engine.tick(&clock) {
            if seen.last() != Some(&caption.text) {
                seen.push(caption.text.clone());
            }
        }
        clock.advance(0.25);
    }

    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], "Welcome to the ASS subtitle demo!");
    assert_eq!(seen[3], "Enjoy the demonstration!");
}

/// Test that seeking backward re-selects earlier captions
#[test]
fn test_playback_withBackwardSeek_shouldReselectEarlierCaption() {
    let engine = SubtitleEngine::new();
    engine.load_script(common::sample_script());

    let mut clock = MockClock::new(30.0);

    clock.seek(10.0);
    assert_eq!(engine.tick(&clock).unwrap().text, "Enjoy the demonstration!");

    clock.seek(2.0);
    assert_eq!(
        engine.tick(&clock).unwrap().text,
        "Welcome to the ASS subtitle demo!"
    );
}

/// Test toggling captions off and on during playback
#[test]
fn test_playback_withCaptionToggle_shouldMuteAndRestore() {
    let engine = SubtitleEngine::new();
    engine.load_script(common::sample_script());

    let mut clock = MockClock::new(30.0);
    clock.seek(2.0);

    assert!(engine.tick(&clock).is_some());

    engine.set_visible(false);
    assert!(engine.tick(&clock).is_none());

    engine.set_visible(true);
    assert!(engine.tick(&clock).is_some());
}

/// Test the full async path: fetch the bundled sample and synchronize
#[tokio::test]
async fn test_playback_withAsyncSourceLoad_shouldSynchronize() {
    let engine = SubtitleEngine::new();
    engine.load_from(&StaticSource::sample()).await.unwrap();

    let mut clock = MockClock::new(30.0);
    clock.seek(8.0);

    let caption = engine.tick(&clock).unwrap();
    assert_eq!(caption.text, "With proper timing and synchronization.");
}
