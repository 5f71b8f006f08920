/// Reduces any shift into `0..modulus`, negative shifts included.
pub fn normalize_shift(shift: i64, modulus: usize) -> usize {
    shift.rem_euclid(modulus as i64) as usize
}

pub fn rotate_left(chars: &[char], by: usize) -> Vec<char> {
    let mut rotated = chars.to_vec();

    if !rotated.is_empty() {
        rotated.rotate_left(by % chars.len());
    }

    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_shift_wraps_both_directions() {
        assert_eq!(normalize_shift(3, 26), 3);
        assert_eq!(normalize_shift(29, 26), 3);
        assert_eq!(normalize_shift(-1, 26), 25);
        assert_eq!(normalize_shift(-26, 26), 0);
        assert_eq!(normalize_shift(25, 32), 25);
    }

    #[test]
    fn rotate_left_moves_head_to_tail() {
        let chars: Vec<char> = "abcde".chars().collect();

        assert_eq!(rotate_left(&chars, 2), vec!['c', 'd', 'e', 'a', 'b']);
        assert_eq!(rotate_left(&chars, 0), chars);
        assert_eq!(rotate_left(&chars, 7), rotate_left(&chars, 2));
        assert!(rotate_left(&[], 3).is_empty());
    }
}
