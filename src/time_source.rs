use chrono::{Local, Timelike};

/// A wall-clock reading with validated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        (hour < 24 && minute < 60 && second < 60).then_some(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        // chrono reports leap seconds through the nanosecond field, so the
        // second field is always below 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// The next second, wrapping at midnight.
    pub fn succ(self) -> Self {
        let total = (self.seconds_since_midnight() + 1) % 86_400;
        Self {
            hour: (total / 3600) as u8,
            minute: (total / 60 % 60) as u8,
            second: (total % 60) as u8,
        }
    }

    fn seconds_since_midnight(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }
}

/// Pull-based source of the current time. Always yields a valid reading.
pub trait TimeSource {
    fn now(&mut self) -> TimeOfDay;
}

/// Local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&mut self) -> TimeOfDay {
        TimeOfDay::from_timelike(&Local::now())
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub TimeOfDay);

impl TimeSource for FixedTime {
    fn now(&mut self) -> TimeOfDay {
        self.0
    }
}

/// Advances by one second every time it is read.
#[derive(Debug, Clone, Copy)]
pub struct TickingTime {
    next: TimeOfDay,
}

impl TickingTime {
    pub fn starting_at(time: TimeOfDay) -> Self {
        Self { next: time }
    }
}

impl TimeSource for TickingTime {
    fn now(&mut self) -> TimeOfDay {
        let current = self.next;
        self.next = current.succ();
        current
    }
}
