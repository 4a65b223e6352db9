pub const PI: f64 = std::f64::consts::PI;

pub const DEG_TO_RAD: f64 = PI / 180.0;

pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// One hour of right ascension spans 15 degrees.
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const MINUTES_PER_UNIT: f64 = 60.0;

pub const SECONDS_PER_UNIT: f64 = 3600.0;

pub const FULL_CIRCLE_DEG: f64 = 360.0;
