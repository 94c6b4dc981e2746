use std::process;

use elbonian_core::{ConvertError, Numeral};
use serde::Serialize;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Serialize)]
struct ConversionRecord<'a> {
    input: &'a str,
    arabic: u16,
    elbonian: &'a str,
}

pub fn convert_cmd(input: &str, json: bool) {
    let numeral = die!(Numeral::parse(input), "Error: {}");
    if json {
        let record = ConversionRecord {
            input: input.trim(),
            arabic: numeral.to_arabic(),
            elbonian: numeral.to_elbonian(),
        };
        let line = die!(serde_json::to_string(&record), "Error encoding JSON: {}");
        println!("{line}");
    } else {
        println!("{} = {}", numeral.to_arabic(), numeral.to_elbonian());
    }
}

pub fn check_cmd(input: &str) {
    match Numeral::parse(input) {
        Ok(numeral) => {
            println!(
                "ok: {} = {}",
                numeral.to_elbonian(),
                numeral.to_arabic()
            );
        }
        Err(e @ ConvertError::ValueOutOfBounds(_)) => {
            eprintln!("out of bounds: {e}");
            process::exit(1);
        }
        Err(ConvertError::MalformedNumber(rule)) => {
            eprintln!("malformed: {rule}");
            process::exit(1);
        }
    }
}
