use crate::time_source::TimeOfDay;

/// Hand angles in degrees. 0° points right, angles grow clockwise and the
/// -90° offset is already applied, so -90° is twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn as_array(&self) -> [f64; 3] {
        [self.hour, self.minute, self.second]
    }
}

pub fn hand_angles(time: TimeOfDay) -> HandAngles {
    let hour = (time.hour() % 12) as f64 + time.minute() as f64 / 60.0;
    HandAngles {
        hour: hour * 30.0 - 90.0,
        minute: time.minute() as f64 * 6.0 - 90.0,
        second: time.second() as f64 * 6.0 - 90.0,
    }
}
