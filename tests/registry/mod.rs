use bmpshop::{
  bmp::validate,
  registry::{operations, run, FilterOutput, Invocation, OperationKind, Outcome},
  Bgr8, BitmapImage, Color, Coordinate, EngineError,
};

/// 5 pixels wide, so every row carries a byte of padding.
fn sample() -> BitmapImage {
  let mut img = BitmapImage::new_blank(5, 4).unwrap();
  for y in 0..4 {
    for x in 0..5 {
      img.set_pixel(x, y, Bgr8::new(x as u8 * 50, y as u8 * 80, 200 - x as u8 * 40));
    }
  }
  img
}

fn padding_is_zero(img: &BitmapImage) -> bool {
  let g = img.geometry();
  let (start, stride) = (g.pixel_data_offset as usize, g.row_stride as usize);
  let used = g.width as usize * 3;
  img.as_bytes()[start..].chunks_exact(stride).all(|line| line[used..].iter().all(|&b| b == 0))
}

#[test]
fn test_every_operation_keeps_the_buffer_valid() {
  let other = BitmapImage::new_blank(5, 4).unwrap();
  let invocation = Invocation {
    other: Some(&other),
    color: Some(Color { r: 10, g: 250, b: 30 }),
    extra: Some("2"),
    coordinate: Some(Coordinate::new(2, 1)),
  };
  for info in operations() {
    let mut img = sample();
    let result = match run(info.name, &mut img, &invocation) {
      Ok(Outcome::Mutated) => img,
      Ok(Outcome::Produced(new_image)) => {
        assert_eq!(img, sample(), "`{}` changed its input", info.name);
        new_image
      }
      Err(e) => panic!("`{}` failed: {e}", info.name),
    };
    assert!(validate(result.as_bytes()).is_ok(), "{}", info.name);
    assert_eq!(result.dimensions(), (5, 4), "{}", info.name);
    assert!(padding_is_zero(&result), "`{}` wrote to the row padding", info.name);
  }
}

#[test]
fn test_catalog_lists_filters_and_tools() {
  let tools: Vec<&str> = operations()
    .iter()
    .filter(|info| info.kind() == OperationKind::Tool)
    .map(|info| info.name)
    .collect();
  assert_eq!(tools, ["change_pixel", "draw_hline", "draw_vline", "draw_gray"]);
  let two_image: Vec<&str> = operations()
    .iter()
    .filter(|info| info.kind() == OperationKind::Filter(FilterOutput::ReturnsNew))
    .map(|info| info.name)
    .collect();
  assert_eq!(two_image, ["blend_other", "chroma_overlay"]);
  let gray = bmpshop::registry::find("draw_gray").unwrap();
  assert!(gray.needs.extra && !gray.needs.color && !gray.needs.other_image);
}

#[test]
fn test_negate_twice_through_the_registry() {
  let mut img = sample();
  run("negate", &mut img, &Invocation::default()).unwrap();
  assert_ne!(img, sample());
  run("negate", &mut img, &Invocation::default()).unwrap();
  assert_eq!(img, sample());
}

#[test]
fn test_two_tone_boundary_through_the_registry() {
  let mut img = BitmapImage::new_blank(2, 1).unwrap();
  img.set_pixel(0, 0, Bgr8::new(127, 127, 128));
  img.set_pixel(1, 0, Bgr8::new(128, 128, 128));
  run("make_two_tone", &mut img, &Invocation::default()).unwrap();
  assert_eq!(img.pixel(0, 0), Bgr8::BLACK);
  assert_eq!(img.pixel(1, 0), Bgr8::WHITE);
}

#[test]
fn test_chroma_overlay_through_the_registry() {
  let mut foreground = BitmapImage::new_blank(2, 2).unwrap();
  foreground.for_each_pixel_mut(|px| *px = Bgr8::new(0, 255, 0));
  foreground.set_pixel(1, 1, Bgr8::new(50, 60, 50));
  let mut background = BitmapImage::new_blank(2, 2).unwrap();
  background.for_each_pixel_mut(|px| *px = Bgr8::new(1, 2, 3));
  let invocation = Invocation { other: Some(&background), ..Invocation::default() };
  let Ok(Outcome::Produced(out)) = run("chroma_overlay", &mut foreground, &invocation) else {
    panic!("chroma_overlay should build a new image");
  };
  assert_eq!(out.pixel(0, 0), Bgr8::new(1, 2, 3));
  assert_eq!(out.pixel(1, 0), Bgr8::new(1, 2, 3));
  assert_eq!(out.pixel(0, 1), Bgr8::new(1, 2, 3));
  assert_eq!(out.pixel(1, 1), Bgr8::new(50, 60, 50));
}

#[test]
fn test_errors_leave_the_image_alone() {
  let mut img = sample();
  let small = BitmapImage::new_blank(4, 4).unwrap();
  let invocation = Invocation { other: Some(&small), ..Invocation::default() };
  assert_eq!(
    run("blend_other", &mut img, &invocation),
    Err(EngineError::DimensionMismatch { primary: (5, 4), secondary: (4, 4) })
  );

  let invocation = Invocation {
    color: Some(Color { r: 1, g: 2, b: 3 }),
    coordinate: Some(Coordinate::new(0, 4)),
    ..Invocation::default()
  };
  assert!(matches!(
    run("draw_hline", &mut img, &invocation),
    Err(EngineError::CoordinateOutOfBounds { x: 0, y: 4, width: 5, height: 4 })
  ));

  let mut one_row = BitmapImage::new_blank(3, 1).unwrap();
  assert!(matches!(
    run("fade_in_vertical", &mut one_row, &Invocation::default()),
    Err(EngineError::DegenerateGeometry(_))
  ));
  assert_eq!(img, sample());
}

#[test]
fn test_clicks_from_the_top_left() {
  // a UI measures from the top, storage rows count from the bottom
  let mut img = BitmapImage::new_blank(3, 4).unwrap();
  let at = Coordinate::from_top_left(1, 0, img.height()).unwrap();
  let invocation = Invocation {
    color: Some(Color { r: 255, g: 255, b: 255 }),
    coordinate: Some(at),
    ..Invocation::default()
  };
  run("change_pixel", &mut img, &invocation).unwrap();
  assert_eq!(img.pixel(1, 3), Bgr8::WHITE);
  assert!(Coordinate::from_top_left(1, 4, img.height()).is_none());
}
