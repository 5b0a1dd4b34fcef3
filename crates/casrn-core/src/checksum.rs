//! # Check Digit
//!
//! The CAS check digit is a weighted sum over the body digits (everything but
//! the final digit), read right to left with 1-based weights, reduced mod 10.
//!
//! For `58-08-2` the body is `5808`; read right to left that is `8, 0, 8, 5`,
//! so the sum is `1*8 + 2*0 + 3*8 + 4*5 = 52` and the check digit is `2`.

/// Compute the check digit for a body value (the number without its last digit).
///
/// Walks the digits from least to most significant, so the weight of each
/// digit is its 1-based position in the reversed decimal rendering.
pub fn check_digit_for(body: u64) -> u8 {
    let mut rest = body;
    let mut position: u64 = 1;
    let mut sum: u64 = 0;
    while rest > 0 {
        sum += position * (rest % 10);
        rest /= 10;
        position += 1;
    }
    (sum % 10) as u8
}

/// Split a full value into its body and its trailing check digit.
pub fn split_check_digit(value: u64) -> (u64, u8) {
    (value / 10, (value % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caffeine_checksum() {
        assert_eq!(check_digit_for(5808), 2);
    }

    #[test]
    fn formaldehyde_checksum() {
        // 50-00-0
        assert_eq!(check_digit_for(5000), 0);
    }

    #[test]
    fn water_checksum() {
        // 7732-18-5: 8*1 + 1*2 + 2*3 + 3*4 + 7*5 + 7*6 = 105
        assert_eq!(check_digit_for(773218), 5);
    }

    #[test]
    fn ethanol_checksum() {
        // 64-17-5, so 64-17-6 carries the wrong digit.
        assert_eq!(check_digit_for(6417), 5);
    }

    #[test]
    fn lowest_theoretical_number() {
        // 10-00-4: body 1000 reversed is 0001, weight 4 on the 1.
        assert_eq!(check_digit_for(1000), 4);
    }

    #[test]
    fn split() {
        assert_eq!(split_check_digit(58082), (5808, 2));
        assert_eq!(split_check_digit(10004), (1000, 4));
    }

    #[test]
    fn zero_body() {
        assert_eq!(check_digit_for(0), 0);
    }
}
