/// Centimeters per foot, the model's internal length unit.
pub const CM_PER_FOOT: f64 = 30.48;

/// Converts centimeters to internal length units.
#[must_use]
pub fn cm_to_feet(cm: f64) -> f64 {
    cm / CM_PER_FOOT
}

/// Converts internal length units to whole centimeters for display.
#[must_use]
pub fn feet_to_cm(feet: f64) -> f64 {
    (feet * CM_PER_FOOT).round()
}
