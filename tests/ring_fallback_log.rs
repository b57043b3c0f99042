use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};
use slicevg::{SliceMode, SliceParams};

struct FallbackCounter;

static FALLBACKS: AtomicUsize = AtomicUsize::new(0);

impl Log for FallbackCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Debug && record.args().to_string().contains("leaves no hole") {
            FALLBACKS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: FallbackCounter = FallbackCounter;

#[test]
fn ring_fallback_is_logged_once_per_path() {
    log::set_logger(&LOGGER).expect("no other logger in this test binary");
    log::set_max_level(LevelFilter::Trace);

    let pie = SliceParams::new([0.0, 0.0], 10.0, 0.0, 90.0, 10.0).with_mode(SliceMode::Ring);

    for _ in 0..3 {
        assert!(!pie.draws_inner_arc());
    }
    assert_eq!(FALLBACKS.load(Ordering::SeqCst), 0);

    pie.path();
    assert_eq!(FALLBACKS.load(Ordering::SeqCst), 1);

    pie.with_mode(SliceMode::Auto).path();
    assert_eq!(FALLBACKS.load(Ordering::SeqCst), 1);
}
