use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Tick,
    RevertTemporary { divisor: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredEvent {
    pub at: Duration,
    pub event: ClockEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    due: Duration,
    seq: u64,
    event: ClockEvent,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
pub struct Clock {
    now: Duration,
    tick_period: Duration,
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
    running: bool,
}

impl Clock {
    pub fn new(tick_period: Duration) -> Self {
        let mut clock = Self {
            now: Duration::ZERO,
            tick_period: tick_period.max(Duration::from_millis(1)),
            queue: BinaryHeap::new(),
            next_seq: 0,
            running: true,
        };
        clock.push(clock.tick_period, ClockEvent::Tick);
        clock
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn schedule(&mut self, delay: Duration, event: ClockEvent) {
        if !self.running {
            return;
        }
        self.push(self.now + delay, event);
    }

    /// Moves time forward, releasing due events in (due, submission) order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<FiredEvent> {
        let target = self.now.saturating_add(elapsed);
        let mut fired = Vec::new();

        while self.running {
            let Some(Reverse(next)) = self.queue.peek().copied() else {
                break;
            };
            if next.due > target {
                break;
            }
            self.queue.pop();
            self.now = next.due;
            if next.event == ClockEvent::Tick {
                self.push(next.due + self.tick_period, ClockEvent::Tick);
            }
            fired.push(FiredEvent {
                at: next.due,
                event: next.event,
            });
        }

        self.now = target;
        fired
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.queue.clear();
    }

    fn push(&mut self, due: Duration, event: ClockEvent) {
        self.queue.push(Reverse(Scheduled {
            due,
            seq: self.next_seq,
            event,
        }));
        self.next_seq += 1;
    }
}
