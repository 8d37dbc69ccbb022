#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|input: (i128, u8, f64)| {
    let (mantissa, scale, float) = input;
    // Any representable decimal must either spell out or be refused, never panic
    if let Ok(amount) = Decimal::try_from_i128_with_scale(mantissa, u32::from(scale % 29)) {
        if let Ok(words) = beejak::amount_to_words(amount) {
            assert!(!words.is_empty());
            assert!(!words.contains("  "));
        }
    }

    let _ = beejak::amount_to_words_f64(float);
});
