mod earclip {
  use polyinterp::algorithms::triangulation::earclip::*;
  use polyinterp::algorithms::triangulation::Triangulate;
  use polyinterp::data::*;
  use polyinterp::interpolation::*;
  use polyinterp::*;

  use rand::SeedableRng;

  fn pts(coords: &[[f64; 2]]) -> Vec<Point<f64, 2>> {
    coords.iter().copied().map(Point::new).collect()
  }

  #[test]
  fn triangle() {
    let pts = pts(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    assert_eq!(triangulate_polygon(&pts), vec![[0, 1, 2]]);
  }

  #[test]
  fn too_few() {
    assert!(triangulate_polygon::<f64>(&[]).is_empty());
    let pts = pts(&[[0.0, 0.0], [1.0, 0.0]]);
    assert!(triangulate_polygon(&pts).is_empty());
    assert_eq!(
      Triangulation::new(&pts).unwrap_err(),
      Error::InsufficientVertices
    );
  }

  #[test]
  fn square() -> Result<(), Error> {
    let poly = Polygon::new(pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]))?;
    assert_eq!(poly.triangulate(), vec![[3, 0, 1], [1, 2, 3]]);
    assert_eq!(poly.points().triangulate(), poly.triangulate());
    Ok(())
  }

  #[test]
  fn arrow() -> Result<(), Error> {
    let pts = pts(&[[0.0, 0.0], [2.0, 1.0], [4.0, 0.0], [2.0, 4.0]]);
    let mesh = Triangulation::new(&pts)?;
    assert_eq!(mesh.triangles(), &[[3, 0, 1], [1, 2, 3]]);
    assert!((mesh.area() - 4.0).abs() < 1e-12);
    Ok(())
  }

  #[test]
  fn untriangulable() {
    let pts = pts(&[
      [7.0, 18.0],
      [1.0, 3.0],
      [19.0, 18.0],
      [14.0, 5.0],
      [4.0, 10.0],
      [0.0, 1.0],
      [14.0, 9.0],
    ]);
    assert!(triangulate_polygon(&pts).is_empty());
    assert!(triangulate_polygon_with(&pts, &EarClipConfig::convex_only()).is_empty());
  }

  #[test]
  fn deterministic() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let poly = Polygon::<f64>::random_star(50, &mut rng);
    let config = EarClipConfig::convex_only();
    let first = poly.triangulate_with(&config);
    assert_eq!(first.len(), 48);
    assert_eq!(first, poly.triangulate_with(&config));
  }

  #[test]
  fn interpolate_square() -> Result<(), Error> {
    let pts = pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    let heights = [[0.0], [1.0], [2.0], [1.0]];
    let mesh = Triangulation::new(&pts)?;
    let value = mesh.interpolate(&Point::new([0.5, 0.5]), &heights)?;
    assert_eq!(value.map(|[h]| (h - 1.0).abs() < 1e-12), Some(true));
    assert_eq!(mesh.interpolate(&Point::new([2.0, 2.0]), &heights)?, None);
    Ok(())
  }
}
