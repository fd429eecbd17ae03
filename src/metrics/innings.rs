//! Innings-pitched arithmetic.
//!
//! Box scores report innings in baseball thirds notation: "6.2" means six
//! innings plus two outs. Summing those strings as decimals is wrong, so all
//! aggregation happens in outs.

/// Parse a thirds-notation innings string into outs. Unparseable input
/// contributes zero outs, matching how absent lines are treated.
pub fn ip_to_outs(value: &str) -> u32 {
    let mut parts = value.splitn(2, '.');
    let whole: u32 = parts
        .next()
        .and_then(|w| w.trim().parse().ok())
        .unwrap_or(0);
    let extra = match parts.next().map(str::trim) {
        Some("1") => 1,
        Some("2") => 2,
        _ => 0,
    };
    whole * 3 + extra
}

/// Outs back to decimal innings, rounded to one place for display
/// (20 outs -> 6.7).
pub fn outs_to_ip(outs: u32) -> f64 {
    (outs as f64 / 3.0 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_to_outs_thirds_notation() {
        assert_eq!(ip_to_outs("6.0"), 18);
        assert_eq!(ip_to_outs("6.1"), 19);
        assert_eq!(ip_to_outs("6.2"), 20);
        assert_eq!(ip_to_outs("0.1"), 1);
        assert_eq!(ip_to_outs("9"), 27);
    }

    #[test]
    fn test_ip_to_outs_garbage_is_zero() {
        assert_eq!(ip_to_outs(""), 0);
        assert_eq!(ip_to_outs("-"), 0);
        assert_eq!(ip_to_outs("abc"), 0);
        // A bogus fraction digit counts as a whole number of innings.
        assert_eq!(ip_to_outs("6.7"), 18);
    }

    #[test]
    fn test_outs_to_ip_display_rounding() {
        assert_eq!(outs_to_ip(18), 6.0);
        assert_eq!(outs_to_ip(19), 6.3);
        assert_eq!(outs_to_ip(20), 6.7);
        assert_eq!(outs_to_ip(0), 0.0);
    }
}
