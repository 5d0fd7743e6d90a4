// Strategies for:
//  * points
//  * triangles
//  * polygons (convex and star-shaped)
use crate::data::{Point, Polygon, Triangle, TriangleView};

use core::ops::Range;
use proptest::array::uniform2;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const COORD_RANGE: Range<f64> = -100.0..100.0;
const VERTEX_COUNT: Range<usize> = 3..40;

pub fn any_point() -> impl Strategy<Value = Point<f64, 2>> {
  uniform2(COORD_RANGE).prop_map(Point::new)
}

/// Triangles with edges of length at least one at the first corner and a
/// corner angle whose sine is at least 0.01.
pub fn any_triangle() -> impl Strategy<Value = Triangle<f64>> {
  (any_point(), any_point(), any_point()).prop_filter_map("near-degenerate", |(a, b, c)| {
    let ab = a.euclidean_distance(&b);
    let ac = a.euclidean_distance(&c);
    let area_2x = TriangleView::new_unchecked([&a, &b, &c]).signed_area_2x();
    if ab >= 1.0 && ac >= 1.0 && area_2x.abs() >= 0.01 * ab * ac {
      Some(Triangle::new([a, b, c]))
    } else {
      None
    }
  })
}

pub fn any_convex() -> impl Strategy<Value = Polygon<f64>> {
  (VERTEX_COUNT, any::<u64>()).prop_map(|(n, seed)| {
    Polygon::random_convex(n, &mut SmallRng::seed_from_u64(seed))
  })
}

pub fn any_star() -> impl Strategy<Value = Polygon<f64>> {
  (VERTEX_COUNT, any::<u64>()).prop_map(|(n, seed)| {
    Polygon::random_star(n, &mut SmallRng::seed_from_u64(seed))
  })
}
