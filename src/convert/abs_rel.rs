//! `AbsRel<T>`: a value paired with a policy for combining it with a
//! simulator-reported reference value.
//!
//! Several places in the conversion pipeline (goal region synthesis, in
//! particular) need a value that is either an absolute override or a
//! relative offset/factor applied to whatever the simulator reported. Rather
//! than dispatching through a trait object per field, each field carries its
//! own `(value, policy)` pair and `apply` does the arithmetic.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// How an `AbsRel` value combines with a reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Use the value as-is, ignoring the reference.
    Abs,
    /// `reference + value`
    RelAdd,
    /// `reference - value`
    RelSub,
    /// `reference * value`
    RelMul,
    /// `reference / value`
    RelDiv,
}

/// A value together with the policy used to combine it with a reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsRel<T> {
    pub value: T,
    pub policy: Policy,
}

impl<T> AbsRel<T> {
    pub fn new(value: T, policy: Policy) -> Self {
        Self { value, policy }
    }

    pub fn abs(value: T) -> Self {
        Self::new(value, Policy::Abs)
    }

    pub fn rel_add(value: T) -> Self {
        Self::new(value, Policy::RelAdd)
    }

    pub fn rel_sub(value: T) -> Self {
        Self::new(value, Policy::RelSub)
    }

    pub fn rel_mul(value: T) -> Self {
        Self::new(value, Policy::RelMul)
    }

    pub fn rel_div(value: T) -> Self {
        Self::new(value, Policy::RelDiv)
    }
}

impl<T> AbsRel<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    /// Combine `reference` with this value according to the policy.
    pub fn apply(&self, reference: T) -> T {
        match self.policy {
            Policy::Abs => self.value,
            Policy::RelAdd => reference + self.value,
            Policy::RelSub => reference - self.value,
            Policy::RelMul => reference * self.value,
            Policy::RelDiv => reference / self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_ignores_reference() {
        let a = AbsRel::abs(5.0);
        assert_eq!(a.apply(100.0), 5.0);
    }

    #[test]
    fn rel_add_offsets_reference() {
        let a = AbsRel::rel_add(30);
        assert_eq!(a.apply(10), 40);
    }

    #[test]
    fn rel_sub_offsets_reference() {
        let a = AbsRel::rel_sub(5);
        assert_eq!(a.apply(10), 5);
    }

    #[test]
    fn rel_mul_scales_reference() {
        let a = AbsRel::rel_mul(2.0);
        assert_eq!(a.apply(4.0), 8.0);
    }

    #[test]
    fn rel_div_scales_reference() {
        let a = AbsRel::rel_div(2.0);
        assert_eq!(a.apply(8.0), 4.0);
    }
}
