use num_traits::Float;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is computed with the adaptive-precision `orient2d` predicate, so
  /// nearly-colinear inputs are classified exactly rather than by a rounded
  /// cross product.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polyinterp::data::Point;
  /// # use polyinterp::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T, 2>, p2: &Point<T, 2>, p3: &Point<T, 2>) -> Orientation
  where
    T: Float,
  {
    let orient = geometry_predicates::predicates::orient2d(as_f64(p1), as_f64(p2), as_f64(p3));
    Orientation::from_signed(orient)
  }

  /// Orientation of a signed area (or cross product). NaN counts as colinear.
  pub fn from_signed<T: Float>(value: T) -> Orientation {
    if value > T::zero() {
      CounterClockWise
    } else if value < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn are_colinear<T>(p1: &Point<T, 2>, p2: &Point<T, 2>, p3: &Point<T, 2>) -> bool
  where
    T: Float,
  {
    Orientation::new(p1, p2, p3) == CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

fn as_f64<T: Float>(p: &Point<T, 2>) -> [f64; 2] {
  [
    p.x_coord().to_f64().unwrap_or(f64::NAN),
    p.y_coord().to_f64().unwrap_or(f64::NAN),
  ]
}
