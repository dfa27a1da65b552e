/// Round to three decimal places, the precision all reported scores and
/// metrics use.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
