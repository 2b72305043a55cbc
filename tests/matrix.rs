use sense_matrix::{
    Frame, LedMatrix, MatrixError, MemoryFrameBuffer, PixelSource, Rgb, Rotation,
};

/// Asymmetric pattern whose channels survive RGB565 exactly.
fn test_pattern() -> Frame {
    Frame::from_fn(|x, y| Rgb::new(x * 8, y * 8, 64))
}

fn matrix() -> LedMatrix<MemoryFrameBuffer> {
    LedMatrix::new(MemoryFrameBuffer::new())
}

#[test]
fn set_then_get_pixel_round_trips_exact_colors() {
    let mut matrix = matrix();
    matrix.set_pixel(3, 4, Rgb::new(248, 252, 248)).unwrap();
    assert_eq!(matrix.pixel(3, 4).unwrap(), Rgb::new(248, 252, 248));
    assert_eq!(matrix.pixel(4, 3).unwrap(), Rgb::BLACK);
}

#[test]
fn get_pixel_reports_the_truncated_channel_values() {
    let mut matrix = matrix();
    matrix.set_pixel(0, 0, Rgb::new(255, 255, 255)).unwrap();
    assert_eq!(matrix.pixel(0, 0).unwrap(), Rgb::new(248, 252, 248));
}

#[test]
fn set_pixel_writes_one_record_without_reading() {
    let mut matrix = matrix();
    matrix.set_pixel(1, 0, Rgb::new(255, 0, 0)).unwrap();
    // Red packs to 0xF800, little-endian at record index 1.
    assert_eq!(&matrix.port().bytes()[2..4], &[0x00, 0xF8]);
    assert_eq!(matrix.port().read_count(), 0);
    assert_eq!(matrix.port().write_count(), 1);
}

#[test]
fn out_of_range_coordinates_fail_before_any_io() {
    let mut matrix = matrix();
    assert!(matches!(
        matrix.set_pixel(8, 0, Rgb::BLACK),
        Err(MatrixError::InvalidCoordinate { x: 8, y: 0 })
    ));
    assert!(matches!(
        matrix.pixel(0, 8),
        Err(MatrixError::InvalidCoordinate { x: 0, y: 8 })
    ));
    assert_eq!(matrix.port().read_count(), 0);
    assert_eq!(matrix.port().write_count(), 0);
}

#[test]
fn set_pixels_pushes_the_whole_frame_in_one_write() {
    let mut matrix = matrix();
    matrix
        .set_pixels(PixelSource::Grid(test_pattern()))
        .unwrap();
    assert_eq!(matrix.port().write_count(), 1);
    assert_eq!(matrix.pixels().unwrap(), test_pattern());
}

#[test]
fn generator_source_is_evaluated_per_cell() {
    let mut matrix = matrix();
    matrix
        .set_pixels(PixelSource::Generator(&|x, y| Rgb::new(x * 8, y * 4, 0)))
        .unwrap();
    assert_eq!(matrix.pixel(7, 0).unwrap(), Rgb::new(56, 0, 0));
    assert_eq!(matrix.pixel(0, 7).unwrap(), Rgb::new(0, 28, 0));
    assert_eq!(matrix.pixel(5, 3).unwrap(), Rgb::new(40, 12, 0));
}

#[test]
fn clear_switches_every_pixel_off() {
    let mut matrix = matrix();
    matrix.fill(Rgb::new(16, 32, 48)).unwrap();
    matrix.clear().unwrap();
    assert_eq!(matrix.pixels().unwrap(), Frame::BLACK);
    assert!(matrix.port().bytes().iter().all(|byte| *byte == 0));
}

#[test]
fn fill_sets_every_cell_to_the_same_color() {
    let mut matrix = matrix();
    matrix.fill(Rgb::new(16, 32, 48)).unwrap();
    assert_eq!(matrix.pixels().unwrap(), Frame::solid(Rgb::new(16, 32, 48)));
}

#[test]
fn rotation_changes_the_physical_layout_of_single_writes() {
    let mut matrix = matrix();
    matrix.set_rotation(Rotation::Deg90).unwrap();
    matrix.set_pixel(0, 0, Rgb::new(255, 0, 0)).unwrap();
    // Under 90 degrees (0, 0) backs onto record index 7, byte offset 14.
    assert_eq!(&matrix.port().bytes()[14..16], &[0x00, 0xF8]);
}

#[test]
fn set_rotation_preserves_the_visible_content() {
    let mut matrix = matrix();
    matrix
        .set_pixels(PixelSource::Grid(test_pattern()))
        .unwrap();
    let buffer_before = *matrix.port().bytes();

    for rotation in [Rotation::Deg90, Rotation::Deg180, Rotation::Deg270] {
        matrix.set_rotation(rotation).unwrap();
        assert_eq!(matrix.rotation(), rotation);
        assert_eq!(
            matrix.pixels().unwrap(),
            test_pattern(),
            "content must follow the viewer across {} degrees",
            rotation.degrees()
        );
    }

    // The image is re-projected, so the raw buffer really moved.
    matrix.set_rotation(Rotation::Deg90).unwrap();
    assert_ne!(*matrix.port().bytes(), buffer_before);

    matrix.set_rotation(Rotation::Deg0).unwrap();
    assert_eq!(*matrix.port().bytes(), buffer_before);
}

#[test]
fn horizontal_flip_mirrors_columns_and_is_an_involution() {
    let mut matrix = matrix();
    matrix
        .set_pixels(PixelSource::Grid(test_pattern()))
        .unwrap();

    matrix.flip_horizontal().unwrap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(
                matrix.pixel(x, y).unwrap(),
                test_pattern().rows()[y as usize][7 - x as usize]
            );
        }
    }

    matrix.flip_horizontal().unwrap();
    assert_eq!(matrix.pixels().unwrap(), test_pattern());
}

#[test]
fn vertical_flip_mirrors_rows_and_is_an_involution() {
    let mut matrix = matrix();
    matrix
        .set_pixels(PixelSource::Grid(test_pattern()))
        .unwrap();

    matrix.flip_vertical().unwrap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(
                matrix.pixel(x, y).unwrap(),
                test_pattern().rows()[7 - y as usize][x as usize]
            );
        }
    }

    matrix.flip_vertical().unwrap();
    assert_eq!(matrix.pixels().unwrap(), test_pattern());
}

#[test]
fn rotation_state_starts_at_zero_and_only_set_rotation_moves_it() {
    let mut matrix = matrix();
    assert_eq!(matrix.rotation(), Rotation::Deg0);

    matrix.fill(Rgb::new(8, 8, 8)).unwrap();
    matrix.flip_horizontal().unwrap();
    matrix.clear().unwrap();
    assert_eq!(matrix.rotation(), Rotation::Deg0);

    matrix.set_rotation(Rotation::Deg180).unwrap();
    assert_eq!(matrix.rotation(), Rotation::Deg180);
}
