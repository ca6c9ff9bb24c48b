use kernel_quirks::{DeviceIdentity, Quirk, QuirkIndex, Signature, define_quirk};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn capture() -> &'static CaptureLogger {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    &LOGGER
}

fn has(records: &[(Level, String)], level: Level, needles: &[&str]) -> bool {
    records
        .iter()
        .any(|(l, msg)| *l == level && needles.iter().all(|n| msg.contains(n)))
}

#[test]
fn index_skip_and_enable_events_are_logged() {
    define_quirk!(BROKEN, "broken_range", None, Some("Acme"), None, Some("20-10"));
    define_quirk!(GOOD, "good", Some("acme,fw"), Some("Acme"), None, Some("0x10-0x20"));
    static REGISTRY: [&Quirk; 2] = [&BROKEN, &GOOD];

    let logger = capture();

    let index = QuirkIndex::build(&REGISTRY);
    assert_eq!(index.skipped(), 1);

    let id = DeviceIdentity::new(Some("acme,fw"), Some("Acme"), Some("rev-b"), 0x18);
    assert_eq!(index.enable_quirks_for(&id), ["quirk_good"]);

    let records = logger.records.lock().unwrap();
    let signature = Signature::of(Some("acme,fw"), Some("Acme"), None).to_string();

    // skip event names the offending quirk
    assert!(has(&records, Level::Error, &["quirk_broken_range", "20-10"]));

    // index event carries signature, pattern and range
    assert!(has(
        &records,
        Level::Debug,
        &[
            "registered",
            "quirk_good",
            signature.as_str(),
            "acme,fw/Acme/*",
            "[0x00000010-0x00000020]"
        ]
    ));

    // enable event names the quirk; the match detail names pattern and device
    assert!(has(&records, Level::Info, &["enabling", "quirk_good"]));
    assert!(has(
        &records,
        Level::Debug,
        &["matched on", "acme,fw/Acme/*", "acme,fw/Acme/rev-b/0x00000018"]
    ));

    assert!(!has(&records, Level::Info, &["quirk_broken_range"]));
}
