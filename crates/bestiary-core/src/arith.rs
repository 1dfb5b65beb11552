//! # Arithmetic Helper

use std::ops::Add;

/// Add two values with the native `+` of their type.
pub fn sum<T: Add>(a: T, b: T) -> T::Output {
    a + b
}
