#![no_main]

use libfuzzer_sys::fuzz_target;
use newton_rings::measurements::{parse_points, ValueColumn};
use newton_rings::regression::{fit, infer};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and fitting must never panic, whatever the file holds
        for column in [ValueColumn::Second, ValueColumn::Last] {
            if let Ok(points) = parse_points(input, column) {
                if let Ok(result) = fit(&points) {
                    let _ = infer(&points, &result, 589e-6, 4.0, 0.95);
                }
            }
        }
    }
});
