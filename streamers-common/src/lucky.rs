/// Pick an index for "I'm feeling lucky" from a roll in `[0, 1)`.
///
/// Returns `None` for an empty list. Out-of-range rolls are clamped so the
/// result is always a valid index.
pub fn pick_lucky(len: usize, roll: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    let index = (roll * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(pick_lucky(0, 0.5), None);
    }

    #[test]
    fn test_roll_spreads_over_range() {
        assert_eq!(pick_lucky(4, 0.0), Some(0));
        assert_eq!(pick_lucky(4, 0.26), Some(1));
        assert_eq!(pick_lucky(4, 0.5), Some(2));
        assert_eq!(pick_lucky(4, 0.999), Some(3));
    }

    #[test]
    fn test_out_of_range_rolls_are_clamped() {
        assert_eq!(pick_lucky(3, 1.0), Some(2));
        assert_eq!(pick_lucky(3, 7.5), Some(2));
        assert_eq!(pick_lucky(3, -1.0), Some(0));
        assert_eq!(pick_lucky(3, f64::NAN), Some(0));
    }
}
