// AIGen DAO
// Copyright (C) 2025 AIGen DAO Developers <dev@aigendao.org>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Conversion between whole token units and the reward token's native fixed-point
//! representation.

use crate::Balance;

/// Decimal places of the reward token's native representation.
pub const TOKEN_DECIMALS: u32 = 18;

/// One whole token in native units.
pub const UNIT: Balance = 10u128.pow(TOKEN_DECIMALS);

/// Scale a whole token count to native units.
pub const fn from_whole(whole: u128) -> Balance {
    whole * UNIT
}

/// Parse a whole-unit decimal string, e.g. `"100000"` or `"1.5"`, into native units.
///
/// At most [TOKEN_DECIMALS] fractional digits are accepted.
pub fn parse(s: &str) -> Result<Balance, String> {
    let mut parts = s.splitn(2, '.');
    let integral = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");

    if integral.is_empty() && fraction.is_empty() {
        return Err(format!("invalid token amount {:?}", s));
    }
    if fraction.len() > TOKEN_DECIMALS as usize {
        return Err(format!(
            "token amount {:?} has more than {} fractional digits",
            s, TOKEN_DECIMALS
        ));
    }

    let integral = if integral.is_empty() {
        0
    } else {
        integral
            .parse::<u128>()
            .map_err(|e| format!("invalid token amount {:?}: {}", s, e))?
    };
    let fraction = if fraction.is_empty() {
        0
    } else {
        let scale = 10u128.pow(TOKEN_DECIMALS - fraction.len() as u32);
        fraction
            .parse::<u128>()
            .map_err(|e| format!("invalid token amount {:?}: {}", s, e))?
            * scale
    };

    integral
        .checked_mul(UNIT)
        .and_then(|native| native.checked_add(fraction))
        .ok_or_else(|| format!("token amount {:?} is out of range", s))
}

/// Format native units as a whole-unit decimal string, trimming trailing zeros.
pub fn format(balance: Balance) -> String {
    let integral = balance / UNIT;
    let fraction = balance % UNIT;
    if fraction == 0 {
        integral.to_string()
    } else {
        let digits = format!("{:0width$}", fraction, width = TOKEN_DECIMALS as usize);
        format!("{}.{}", integral, digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_whole_units() {
        assert_eq!(parse("1000000").unwrap(), 1_000_000 * UNIT);
        assert_eq!(parse("0").unwrap(), 0);
    }

    #[test]
    fn parse_fractions() {
        assert_eq!(parse("1.5").unwrap(), UNIT + UNIT / 2);
        assert_eq!(parse(".5").unwrap(), UNIT / 2);
        assert_eq!(parse("0.000000000000000001").unwrap(), 1);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse("").is_err());
        assert!(parse(".").is_err());
        assert!(parse("1.2.3").is_err());
        assert!(parse("ten").is_err());
        assert!(parse("0.0000000000000000001").is_err());
    }

    #[test]
    fn format_trims_zeros() {
        assert_eq!(format(from_whole(100_000)), "100000");
        assert_eq!(format(UNIT + UNIT / 2), "1.5");
        assert_eq!(format(1), "0.000000000000000001");
    }

    #[test]
    fn parse_format_round_trip() {
        let native = parse("123.456").unwrap();
        assert_eq!(parse(&format(native)).unwrap(), native);
    }
}
