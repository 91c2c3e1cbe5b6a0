use ordered_float::OrderedFloat;

/// A path length usable as a queue priority.
pub type Distance = OrderedFloat<f64>;

pub const ZERO: Distance = OrderedFloat(0.0);
pub const INFINITY: Distance = OrderedFloat(f64::INFINITY);

/// Formats a path length, writing `+∞` as `∞`.
pub fn format_distance(value: f64) -> String {
    if value.is_infinite() {
        "∞".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format_distance;

    #[test]
    fn display() {
        assert_eq!(format_distance(4.0), "4");
        assert_eq!(format_distance(2.5), "2.5");
        assert_eq!(format_distance(f64::INFINITY), "∞");
    }
}
