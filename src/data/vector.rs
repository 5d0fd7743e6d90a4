use array_init::array_init;
use num_traits::Float;
use num_traits::Zero;
use std::ops::Add;
use std::ops::Index;
use std::ops::Mul;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: Float,
{
  pub fn dot(&self, other: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn magnitude(&self) -> T {
    self.squared_magnitude().sqrt()
  }
}

impl<T> Vector<T, 2>
where
  T: Float,
{
  /// Two-dimensional cross product ("outer product"): the z-component of the
  /// 3-D cross product, i.e. twice the signed area of the triangle spanned by
  /// `self` and `other`. Positive when `other` lies counter-clockwise of `self`.
  pub fn cross(&self, other: &Vector<T, 2>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  /// Rotate by 90 degrees counter-clockwise.
  pub fn perp(&self) -> Vector<T, 2> {
    Vector([-self.0[1], self.0[0]])
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> Zero for Vector<T, N>
where
  T: Float,
{
  fn zero() -> Vector<T, N> {
    Vector(array_init(|_| Zero::zero()))
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T, const N: usize> Add for Vector<T, N>
where
  T: Float,
{
  type Output = Self;
  fn add(self, other: Self) -> Self {
    Vector(array_init(|i| self.0[i] + other.0[i]))
  }
}

impl<T, const N: usize> Mul<T> for Vector<T, N>
where
  T: Float,
{
  type Output = Self;
  fn mul(self, scalar: T) -> Self {
    Vector(array_init(|i| self.0[i] * scalar))
  }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: Float,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}
