// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence::{catch_panic, ConfluenceError, Result};
use tracing::{info, warn};

const PASSING_AVERAGE: f64 = 6.0;

/// Whether the average of two grades passes.
///
/// An average of exactly 6 is undecided and reported as an error, as is a
/// NaN grade.
pub fn is_approved(first: f64, second: f64) -> Result<bool> {
    let average = (first + second) / 2.0;

    if average > PASSING_AVERAGE {
        Ok(true)
    } else if average < PASSING_AVERAGE {
        Ok(false)
    } else if average == PASSING_AVERAGE {
        Err(ConfluenceError::invalid_state(format!(
            "the average is exactly {PASSING_AVERAGE}"
        )))
    } else {
        Err(ConfluenceError::invalid_state(format!(
            "grades {first} and {second} have no average"
        )))
    }
}

pub fn report() {
    for (first, second) in [(8.0, 7.5), (4.0, 5.0), (6.0, 6.0)] {
        match is_approved(first, second) {
            Ok(approved) => info!("{first} and {second}: approved = {approved}"),
            Err(error) => warn!("{first} and {second}: {error}"),
        }
    }

    // Third-party code may still panic; the guard turns that into a value too.
    match catch_panic(|| -> f64 { panic!("grade sheet is corrupted") }) {
        Ok(average) => info!("average {average}"),
        Err(error) => warn!("recovered: {error}"),
    }
    info!("execution continues after recovery");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_average_is_an_error() {
        assert!(matches!(
            is_approved(6.0, 6.0),
            Err(ConfluenceError::InvalidState { .. })
        ));
    }

    #[test]
    fn nan_grade_is_not_mistaken_for_the_exact_average() {
        assert_eq!(
            is_approved(f64::NAN, 6.0),
            Err(ConfluenceError::invalid_state("grades NaN and 6 have no average"))
        );
    }

    #[test]
    fn averages_on_either_side_decide() {
        assert_eq!(is_approved(7.0, 6.0), Ok(true));
        assert_eq!(is_approved(5.0, 6.0), Ok(false));
    }
}
