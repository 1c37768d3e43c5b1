use std::fmt::Display;
use std::ops::Add;

/// Adds two operands of the same type. Overflow behaves as the type's `Add`.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn sum_line<T>(a: T, b: T) -> String
where
    T: Add<Output = T> + Display,
{
    format!("Sum: {}", add(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_numbers() {
        assert_eq!(add(5, 10), 15);
        assert_eq!(add(-7i64, 7), 0);
        assert_eq!(add(0.5f64, 0.25), 0.75);
    }

    #[test]
    fn test_sum_line() {
        assert_eq!(sum_line(5.0f64, 10.0), "Sum: 15");
        assert_eq!(sum_line(2u8, 3), "Sum: 5");
        assert_eq!(sum_line(1.5f64, 1.0), "Sum: 2.5");
    }

    proptest! {
        #[test]
        fn test_add_matches_operator(a in any::<i32>(), b in any::<i32>()) {
            let (a, b) = (i64::from(a), i64::from(b));
            prop_assert_eq!(add(a, b), a + b);
            prop_assert_eq!(add(a, b) - b, a);
        }

        #[test]
        fn test_add_commutes(a in any::<i32>(), b in any::<i32>()) {
            let (a, b) = (i64::from(a), i64::from(b));
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn test_add_zero_is_identity(a in -1.0e12f64..1.0e12) {
            prop_assert_eq!(add(a, 0.0), a);
        }
    }
}
