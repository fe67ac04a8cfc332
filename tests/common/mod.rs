#![allow(dead_code)]

use facial_harmony::{ImageSize, Landmark, LandmarkSet, Point};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 1000;

pub fn image_size() -> ImageSize {
    ImageSize::new(WIDTH, HEIGHT).expect("valid image size")
}

/// Pixel positions of a face whose every metric sits exactly on its ideal.
///
/// Cheekbone width is 200 px; every other length is derived from it.
pub fn ideal_face_pixels() -> Vec<Point> {
    let cheekbone_width = 200.0;
    let lip_top_y = 492.0;
    let glabella_y = lip_top_y - cheekbone_width / 1.99;
    let nose_base_y = glabella_y + 1.45 * 50.0;
    let philtrum = lip_top_y - nose_base_y;
    let lower_lip_y = 530.0;
    let chin_y = lower_lip_y + 2.40 * philtrum;
    let hairline_y = chin_y - 1.37 * cheekbone_width;

    vec![
        Point::new(454.0, 400.0),        // 1 left pupil
        Point::new(546.0, 400.0),        // 2 right pupil
        Point::new(477.0, 400.0),        // 3 left eye inner
        Point::new(431.0, 400.0),        // 4 left eye outer
        Point::new(523.0, 400.0),        // 5 right eye inner
        Point::new(569.0, 400.0),        // 6 right eye outer
        Point::new(475.0, 460.0),        // 7 left nostril
        Point::new(525.0, 460.0),        // 8 right nostril
        Point::new(500.0, nose_base_y),  // 9 nose base
        Point::new(500.0, glabella_y),   // 10 glabella
        Point::new(461.25, 510.0),       // 11 left mouth corner
        Point::new(538.75, 510.0),       // 12 right mouth corner
        Point::new(400.0, 500.0),        // 13 left cheekbone
        Point::new(600.0, 500.0),        // 14 right cheekbone
        Point::new(406.0, 560.0),        // 15 left jaw
        Point::new(594.0, 560.0),        // 16 right jaw
        Point::new(500.0, lip_top_y),    // 17 upper lip top
        Point::new(500.0, lower_lip_y),  // 18 lower lip bottom
        Point::new(500.0, chin_y),       // 19 chin bottom
        Point::new(475.0, 580.0),        // 20 left chin
        Point::new(525.0, 580.0),        // 21 right chin
        Point::new(500.0, hairline_y),   // 22 hairline
    ]
}

pub fn set_from_pixels(pixels: Vec<Point>) -> LandmarkSet {
    LandmarkSet::from_pixels(image_size(), pixels).expect("valid landmarks")
}

pub fn ideal_face() -> LandmarkSet {
    set_from_pixels(ideal_face_pixels())
}

/// The ideal face with some landmarks moved.
pub fn face_with(moves: &[(Landmark, Point)]) -> LandmarkSet {
    let mut pixels = ideal_face_pixels();
    for (landmark, p) in moves {
        pixels[landmark.index() - 1] = *p;
    }
    set_from_pixels(pixels)
}
