use beejak::core::*;
use rust_decimal_macros::dec;

fn main() {
    let amounts = [
        dec!(0),
        dec!(1),
        dec!(0.50),
        dec!(1180),
        dec!(4130.59),
        dec!(100000),
        dec!(2540000.75),
        dec!(10000000),
        dec!(123456789.01),
    ];

    for amount in amounts {
        match amount_to_words(amount) {
            Ok(words) => println!("{amount:>16}  {words}"),
            Err(e) => println!("{amount:>16}  error: {e}"),
        }
    }

    // Negative and non-finite amounts are refused rather than spelled
    for value in [-5.0, f64::NAN] {
        if let Err(e) = amount_to_words_f64(value) {
            println!("{value:>16}  error: {e}");
        }
    }
}
