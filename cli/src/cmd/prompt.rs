use linfit::LinfitError;
use log::debug;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter the car's mileage (km): ";

/// Asks for a mileage until a finite number is typed.
///
/// Invalid lines are reported on `output` and the prompt repeats. Reaching the
/// end of `input` before a valid number is an [`LinfitError::InvalidNumericInput`].
pub fn read_km<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<f64, LinfitError> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(LinfitError::InvalidNumericInput(
                "input closed before a mileage was entered".to_string(),
            ));
        }

        let raw = line.trim();
        match raw.parse::<f64>() {
            Ok(km) if km.is_finite() => return Ok(km),
            _ => {
                debug!("rejected mileage input {raw:?}");
                writeln!(output, "'{raw}' is not a valid number, try again.")?;
            }
        }
    }
}
