use bigdecimal::BigDecimal;

use crate::Equatable;

/// Numeric equality: `1e1` and `10` are equal although their scales differ.
impl Equatable for BigDecimal {
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}
