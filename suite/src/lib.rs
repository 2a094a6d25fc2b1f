//! Sample palsuite test programs.
//!
//! Each body here backs one binary under `src/bin/`. They are written the way
//! palsuite tests are: initialize, check, report, terminate, return an
//! outcome. None of them knows whether the perf loop is driving it.

use std::sync::atomic::{AtomicU32, Ordering};

use paltest_lib::testing::{EnvSource, ProcessEnv};
use paltest_lib::{
    atoi, fail, host_to_wire16, pass, report, swap16_for_wire, swap_if_big_endian_32, wide_len,
    Harness, Outcome, BIG_ENDIAN_TARGET,
};

/// Iteration on which `loop_probe` reports failure.
pub const PROBE_FAIL_ON_ENV: &str = "PALTEST_PROBE_FAIL_ON";

/// Narrow text the conversion program pushes through the code page.
pub const CONVERSION_SAMPLE: &std::ffi::CStr = c"PAL conformance: caf\u{e9} \u{2713}";

/// Counter ticks the timestamp program waits for.
const TIMESTAMP_SPIN_MS: u64 = 5;

fn init_or_fail(harness: &Harness<'_>, args: &[String]) {
    let result = harness.initialize(args);
    if result != 0 {
        fail!(harness, "ERROR: PAL_Initialize failed with {}", result);
    }
}

/// Convert a sample string to wide and back, checking both buffers.
pub fn conversion_round_trip(harness: &Harness<'_>, args: &[String]) -> Outcome {
    init_or_fail(harness, args);

    let wide = harness.to_wide(CONVERSION_SAMPLE);
    let expected_units = CONVERSION_SAMPLE
        .to_str()
        .map(|text| text.encode_utf16().count())
        .unwrap_or(0);
    if wide_len(&wide) != expected_units || wide.last() != Some(&0) {
        fail!(
            harness,
            "ERROR: wide buffer has {} units, expected {} plus terminator",
            wide_len(&wide),
            expected_units
        );
    }

    let narrow = harness.to_narrow(&wide);
    if narrow.as_slice() != CONVERSION_SAMPLE.to_bytes_with_nul() {
        fail!(harness, "ERROR: round trip produced {:?}", String::from_utf8_lossy(&narrow));
    }

    harness.terminate();
    pass!()
}

/// Check the byte-order helpers against fixed values.
pub fn byte_order(harness: &Harness<'_>, args: &[String]) -> Outcome {
    init_or_fail(harness, args);

    let val32 = swap_if_big_endian_32(0x1122_3344);
    let expected32 = if BIG_ENDIAN_TARGET { 0x4433_2211 } else { 0x1122_3344 };
    if val32 != expected32 {
        fail!(harness, "ERROR: VAL32(0x11223344) = {:#010x}, expected {:#010x}", val32, expected32);
    }

    let wire = swap16_for_wire(0xABCD);
    if wire != 0xCDAB {
        fail!(harness, "ERROR: wire swap of 0xabcd gave {:#06x}", wire);
    }

    let port = host_to_wire16(8080);
    if port.to_ne_bytes() != 8080u16.to_be_bytes() {
        fail!(harness, "ERROR: htons(8080) gave bytes {:?}", port.to_ne_bytes());
    }

    report!(harness, "byte order: {} endian\n", if BIG_ENDIAN_TARGET { "big" } else { "little" });
    harness.terminate();
    pass!()
}

/// Take two timestamps a few milliseconds apart and check they advance.
pub fn timestamp(harness: &Harness<'_>, args: &[String]) -> Outcome {
    init_or_fail(harness, args);

    let frequency = harness.calibration_frequency();
    let start = harness.elapsed_millis(frequency);
    let mut now = start;
    while now < start + TIMESTAMP_SPIN_MS {
        std::hint::spin_loop();
        now = harness.elapsed_millis(frequency);
    }
    if now < start {
        fail!(harness, "ERROR: timestamp went backwards: {} -> {}", start, now);
    }

    report!(harness, "timestamp: {} ms elapsed at {} Hz\n", now - start, frequency);
    harness.terminate();
    pass!()
}

static PROBE_CALLS: AtomicU32 = AtomicU32::new(0);

/// Print one line per call; return `Fail` on the call named by
/// `PALTEST_PROBE_FAIL_ON`.
pub fn loop_probe(harness: &Harness<'_>, args: &[String]) -> Outcome {
    let call = PROBE_CALLS.fetch_add(1, Ordering::Relaxed) + 1;
    init_or_fail(harness, args);
    report!(harness, "iteration {}\n", call);

    let fail_on = ProcessEnv
        .var(PROBE_FAIL_ON_ENV)
        .and_then(|value| atoi(value.as_bytes()));
    if fail_on == i32::try_from(call).ok() {
        report!(harness, "failing iteration {}\n", call);
        return Outcome::Fail;
    }

    harness.terminate();
    pass!()
}

/// Give up through the fail path on the first call.
pub fn fail_path(harness: &Harness<'_>, args: &[String]) -> Outcome {
    init_or_fail(harness, args);
    report!(harness, "attempt\n");
    fail!(harness, "ERROR: deliberate failure from {}", "fail_path");
}
