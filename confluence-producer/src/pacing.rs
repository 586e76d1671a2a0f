// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Delay a producer waits after each message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    /// No delay; the producer is only held back by channel capacity.
    #[default]
    Immediate,
    /// The same delay after every message.
    Fixed(Duration),
    /// A uniformly random delay in `[0, max)` after every message.
    Jitter { max: Duration },
}

impl Pacing {
    pub(crate) fn next_delay(&self, rng: &mut fastrand::Rng) -> Option<Duration> {
        match *self {
            Self::Immediate => None,
            Self::Fixed(delay) => Some(delay),
            Self::Jitter { max } if max.is_zero() => None,
            Self::Jitter { max } => {
                let bound = u64::try_from(max.as_nanos()).unwrap_or(u64::MAX);
                Some(Duration::from_nanos(rng.u64(..bound)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_below_max() {
        let mut rng = fastrand::Rng::with_seed(42);
        let pacing = Pacing::Jitter {
            max: Duration::from_millis(2000),
        };

        for _ in 0..1000 {
            let delay = pacing.next_delay(&mut rng).expect("jitter always delays");
            assert!(delay < Duration::from_millis(2000));
        }
    }

    #[test]
    fn immediate_and_zero_jitter_do_not_delay() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(Pacing::Immediate.next_delay(&mut rng), None);
        assert_eq!(
            Pacing::Jitter { max: Duration::ZERO }.next_delay(&mut rng),
            None
        );
        assert_eq!(
            Pacing::Fixed(Duration::from_secs(1)).next_delay(&mut rng),
            Some(Duration::from_secs(1))
        );
    }
}
