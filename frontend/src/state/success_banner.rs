/// Tracks which success banner is currently on screen.
///
/// Every banner gets a new ticket; a delayed clear only applies if its
/// ticket is still the latest one.
#[derive(Debug, Default)]
pub struct BannerClock {
    generation: u64,
}

impl BannerClock {
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_banner_outlives_earlier_timer() {
        let mut clock = BannerClock::default();
        let first = clock.show();
        let second = clock.show();

        assert!(!clock.is_current(first));
        assert!(clock.is_current(second));
    }

    #[test]
    fn test_single_banner_is_current() {
        let mut clock = BannerClock::default();
        let ticket = clock.show();
        assert!(clock.is_current(ticket));
    }
}
