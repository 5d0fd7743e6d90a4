use num_traits::Float;

use crate::data::{Point, TriangleView};
use crate::Orientation;

// Walk the ring from its head looking for a corner (prev, curr, next) whose
// triangle contains no other ring vertex. Clip it, emit (prev, curr, next) and
// start over from the head. A full pass without an ear aborts the whole
// triangulation. O(n^3) worst case; meant for small, interactively edited
// polygons.

/// Which corners may be clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarTest {
  /// Any corner whose triangle encloses no other remaining vertex. Reflex
  /// corners are not excluded, so on concave input a clipped triangle may lie
  /// outside the polygon.
  AnyCorner,
  /// Only corners that turn the same way as the polygon (textbook
  /// ear-clipping). Always succeeds on simple polygons.
  ConvexOnly,
}

/// What to do with a candidate ear of (numerically) zero area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateEars {
  /// Clip it. A zero-area triangle contains no other vertex.
  Clip,
  /// Skip it and keep scanning.
  Reject,
}

/// How a candidate ear decides whether another vertex lies inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
  /// Signed barycentric weights, boundary included.
  Barycentric,
  /// Unsigned sub-area ratios, each at most one. Also rejects ears whose
  /// triangle merely comes close to another vertex, which fails on inputs as
  /// simple as the unit square. See [`TriangleView::area_ratios`].
  AreaRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarClipConfig {
  pub ear_test: EarTest,
  pub degenerate_ears: DegenerateEars,
  pub containment: Containment,
}

impl Default for EarClipConfig {
  fn default() -> Self {
    EarClipConfig {
      ear_test: EarTest::AnyCorner,
      degenerate_ears: DegenerateEars::Clip,
      containment: Containment::Barycentric,
    }
  }
}

impl EarClipConfig {
  pub fn convex_only() -> Self {
    EarClipConfig::default().with_ear_test(EarTest::ConvexOnly)
  }

  #[must_use]
  pub fn with_ear_test(mut self, ear_test: EarTest) -> Self {
    self.ear_test = ear_test;
    self
  }

  #[must_use]
  pub fn with_degenerate_ears(mut self, degenerate_ears: DegenerateEars) -> Self {
    self.degenerate_ears = degenerate_ears;
    self
  }

  #[must_use]
  pub fn with_containment(mut self, containment: Containment) -> Self {
    self.containment = containment;
    self
  }
}

/// Triangulate a possibly concave polygon given only by its ordered boundary
/// vertices.
///
/// Returns `n - 2` index triples on success. Fewer than three vertices give an
/// empty list, and so does a polygon on which the scan runs out of ears;
/// triangles found before that point are discarded. The result is a pure
/// function of the input.
///
/// ```rust
/// # use polyinterp::algorithms::triangulation::earclip::triangulate_polygon;
/// # use polyinterp::data::Point;
/// let triangle = [
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// assert_eq!(triangulate_polygon(&triangle), vec![[0, 1, 2]]);
/// ```
pub fn triangulate_polygon<T: Float>(points: &[Point<T, 2>]) -> Vec<[usize; 3]> {
  triangulate_polygon_with(points, &EarClipConfig::default())
}

pub fn triangulate_polygon_with<T: Float>(
  points: &[Point<T, 2>],
  config: &EarClipConfig,
) -> Vec<[usize; 3]> {
  if points.len() < 3 {
    return Vec::new();
  }
  let winding = polygon_winding(points);
  let mut ring = Ring::new(points.len());
  let mut triangles = Vec::with_capacity(points.len() - 2);
  while ring.len() > 2 {
    let ear = ring
      .iter()
      .find(|&focus| is_ear(points, &ring, focus, winding, config));
    match ear {
      Some(focus) => {
        let triangle = if ring.len() == 3 {
          // Closing triangle in ring order, so a lone triangle stays [0, 1, 2].
          let head = ring.head();
          [head, ring.next(head), ring.prev(head)]
        } else {
          [ring.prev(focus), focus, ring.next(focus)]
        };
        tracing::trace!(?triangle, remaining = ring.len() - 1, "clipped ear");
        ring.delete(focus);
        triangles.push(triangle);
      }
      None => {
        tracing::debug!(
          vertices = points.len(),
          remaining = ring.len(),
          clipped = triangles.len(),
          "no clippable ear left; discarding partial triangulation"
        );
        return Vec::new();
      }
    }
  }
  triangles
}

fn is_ear<T: Float>(
  points: &[Point<T, 2>],
  ring: &Ring,
  focus: usize,
  winding: Orientation,
  config: &EarClipConfig,
) -> bool {
  let prev = ring.prev(focus);
  let next = ring.next(focus);
  let trig = TriangleView::new_unchecked([&points[prev], &points[focus], &points[next]]);
  if trig.is_degenerate() {
    return config.degenerate_ears == DegenerateEars::Clip;
  }
  if config.ear_test == EarTest::ConvexOnly && trig.orientation() != winding {
    return false;
  }
  let mut other = ring.next(next);
  while other != prev {
    let inside = match config.containment {
      Containment::Barycentric => trig.contains(&points[other]),
      Containment::AreaRatio => trig.within_area_ratios(&points[other]),
    };
    if inside {
      return false;
    }
    other = ring.next(other);
  }
  true
}

// Zero-area input counts as counter-clockwise.
fn polygon_winding<T: Float>(points: &[Point<T, 2>]) -> Orientation {
  let area_2x = points
    .iter()
    .zip(points.iter().cycle().skip(1))
    .fold(T::zero(), |acc, (p, q)| {
      acc + (*p.x_coord() * *q.y_coord() - *q.x_coord() * *p.y_coord())
    });
  match Orientation::from_signed(area_2x) {
    Orientation::ClockWise => Orientation::ClockWise,
    _ => Orientation::CounterClockWise,
  }
}

///////////////////////////////////////////////////////////////////////////////
// Index ring: a circular linked list over vertex indices with a head. Deleting
// the head promotes its successor, so iteration order matches erasing from the
// middle of an array.

struct Ring {
  prev: Vec<usize>,
  next: Vec<usize>,
  head: usize,
  len: usize,
}

impl Ring {
  fn new(size: usize) -> Ring {
    let mut prev = vec![0; size];
    let mut next = vec![0; size];
    for i in 0..size {
      prev[(i + 1) % size] = i;
      next[i] = (i + 1) % size;
    }
    Ring {
      prev,
      next,
      head: 0,
      len: size,
    }
  }

  fn len(&self) -> usize {
    self.len
  }

  fn head(&self) -> usize {
    self.head
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    let mut at = self.head;
    std::iter::from_fn(move || {
      let this = at;
      at = self.next[at];
      Some(this)
    })
    .take(self.len)
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
    if self.head == vertex {
      self.head = next;
    }
    self.len -= 1;
  }
}
