//! # Simulated Latency
//!
//! The delay an actor applies before delivering a reply, modeling a remote round trip.
//! The request itself is always applied immediately; only the reply is deferred.

use std::time::Duration;

/// Delay policy for actor replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// Reply as soon as the request is processed.
    #[default]
    None,
    /// Reply after a fixed delay.
    Fixed(Duration),
}

impl Latency {
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Self::None
        } else {
            Self::Fixed(Duration::from_millis(millis))
        }
    }

    /// The delay to apply, or `None` when replies are immediate.
    pub fn delay(&self) -> Option<Duration> {
        match self {
            Self::None => None,
            Self::Fixed(d) if d.is_zero() => None,
            Self::Fixed(d) => Some(*d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_millis_means_no_delay() {
        assert_eq!(Latency::from_millis(0), Latency::None);
        assert_eq!(Latency::Fixed(Duration::ZERO).delay(), None);
        assert_eq!(
            Latency::from_millis(500).delay(),
            Some(Duration::from_millis(500))
        );
    }
}
