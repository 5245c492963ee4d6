//! Pure unit conversions and the relative-humidity calculation
//!
//! All functions are stateless. Rounding is left to the caller except for
//! [`relative_humidity`], which rounds to two decimal places per the
//! reporting convention.

use crate::constants::{conversions, magnus};

/// Convert a speed in knots to meters per second
pub fn knots_to_meters_per_second(knots: f64) -> f64 {
    knots * conversions::METERS_PER_SECOND_PER_KNOT
}

/// Convert a distance in feet to meters
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * conversions::METERS_PER_FOOT
}

/// Convert a distance in statute miles to kilometers
pub fn statute_miles_to_kilometers(miles: f64) -> f64 {
    miles * conversions::KILOMETERS_PER_STATUTE_MILE
}

/// Convert a pressure in hectopascals to inches of mercury
pub fn hectopascals_to_inches_of_mercury(hectopascals: f64) -> f64 {
    hectopascals * conversions::INCHES_OF_MERCURY_PER_HECTOPASCAL
}

/// Convert a pressure in inches of mercury to hectopascals
pub fn inches_of_mercury_to_hectopascals(inches: f64) -> f64 {
    inches * conversions::HECTOPASCALS_PER_INCH_OF_MERCURY
}

/// Saturation vapor pressure in hPa at temperature `celsius`, via the
/// Magnus approximation
pub fn saturation_vapor_pressure(celsius: f64) -> f64 {
    magnus::BASE_PRESSURE_HPA
        * 10f64.powf(magnus::COEFFICIENT * celsius / (magnus::OFFSET_CELSIUS + celsius))
}

/// Relative humidity in percent from air temperature and dew point, both in
/// degrees Celsius, rounded to two decimal places
pub fn relative_humidity(air_temp: f64, dew_point: f64) -> f64 {
    let saturation = saturation_vapor_pressure(air_temp);
    let actual = saturation_vapor_pressure(dew_point);
    let percent = actual / saturation * 100.0;
    (percent * 100.0).round() / 100.0
}
