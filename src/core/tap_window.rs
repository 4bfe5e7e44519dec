use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapWindow {
    window: Duration,
    taps: VecDeque<Duration>,
}

impl TapWindow {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            taps: VecDeque::new(),
        }
    }

    pub fn record(&mut self, at: Duration) {
        self.taps.push_back(at);
        self.prune(at);
    }

    pub fn prune(&mut self, now: Duration) {
        while let Some(&oldest) = self.taps.front() {
            if now.saturating_sub(oldest) < self.window {
                break;
            }
            self.taps.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn clear(&mut self) {
        self.taps.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::TapWindow;

    #[test]
    fn taps_age_out_of_the_window() {
        let mut window = TapWindow::new(Duration::from_secs(10));
        window.record(Duration::from_secs(0));
        window.record(Duration::from_secs(5));
        assert_eq!(window.len(), 2);

        window.record(Duration::from_secs(10));
        assert_eq!(window.len(), 2);

        window.prune(Duration::from_secs(30));
        assert!(window.is_empty());
    }

    #[test]
    fn bursts_inside_the_window_accumulate() {
        let mut window = TapWindow::new(Duration::from_secs(10));
        for step in 0..100 {
            window.record(Duration::from_millis(step * 50));
        }
        assert_eq!(window.len(), 100);
    }
}
