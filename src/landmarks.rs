//! The 22 canonical facial landmarks and the set an operator records them into.
//!
//! Landmarks are stored as fractions of the reference image's width and
//! height. The image dimensions are captured once when the set is created,
//! so later changes in how the image is displayed never skew the stored
//! geometry.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{ImageSize, Point};

/// Number of landmarks a complete set holds.
pub const NUM_LANDMARKS: usize = 22;

/// A named anatomical reference point, in the order the operator places them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landmark {
    LeftPupil = 1,
    RightPupil,
    LeftEyeInnerCorner,
    LeftEyeOuterCorner,
    RightEyeInnerCorner,
    RightEyeOuterCorner,
    LeftNostril,
    RightNostril,
    NoseBase,
    Glabella,
    LeftMouthCorner,
    RightMouthCorner,
    LeftCheekbone,
    RightCheekbone,
    LeftJaw,
    RightJaw,
    UpperLipTop,
    LowerLipBottom,
    ChinBottom,
    LeftChin,
    RightChin,
    Hairline,
}

impl Landmark {
    /// All landmarks in canonical placement order.
    pub const ALL: [Landmark; NUM_LANDMARKS] = [
        Landmark::LeftPupil,
        Landmark::RightPupil,
        Landmark::LeftEyeInnerCorner,
        Landmark::LeftEyeOuterCorner,
        Landmark::RightEyeInnerCorner,
        Landmark::RightEyeOuterCorner,
        Landmark::LeftNostril,
        Landmark::RightNostril,
        Landmark::NoseBase,
        Landmark::Glabella,
        Landmark::LeftMouthCorner,
        Landmark::RightMouthCorner,
        Landmark::LeftCheekbone,
        Landmark::RightCheekbone,
        Landmark::LeftJaw,
        Landmark::RightJaw,
        Landmark::UpperLipTop,
        Landmark::LowerLipBottom,
        Landmark::ChinBottom,
        Landmark::LeftChin,
        Landmark::RightChin,
        Landmark::Hairline,
    ];

    /// 1-based position in the placement order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        if (1..=NUM_LANDMARKS).contains(&index) {
            Ok(Self::ALL[index - 1])
        } else {
            Err(Error::OutOfRange {
                index,
                max: NUM_LANDMARKS,
            })
        }
    }

    /// Name shown to the operator when asking for this point.
    pub const fn name(self) -> &'static str {
        match self {
            Landmark::LeftPupil => "Pupila izquierda",
            Landmark::RightPupil => "Pupila derecha",
            Landmark::LeftEyeInnerCorner => "Borde interno ojo izquierdo",
            Landmark::LeftEyeOuterCorner => "Borde externo ojo izquierdo",
            Landmark::RightEyeInnerCorner => "Borde interno ojo derecho",
            Landmark::RightEyeOuterCorner => "Borde externo ojo derecho",
            Landmark::LeftNostril => "Fosa nasal izquierda",
            Landmark::RightNostril => "Fosa nasal derecha",
            Landmark::NoseBase => "Base nasal (parte baja)",
            Landmark::Glabella => "Entrecejo / glabella",
            Landmark::LeftMouthCorner => "Comisura izquierda",
            Landmark::RightMouthCorner => "Comisura derecha",
            Landmark::LeftCheekbone => "Pómulo izquierdo",
            Landmark::RightCheekbone => "Pómulo derecho",
            Landmark::LeftJaw => "Mandíbula izquierda",
            Landmark::RightJaw => "Mandíbula derecha",
            Landmark::UpperLipTop => "Parte superior del labio superior",
            Landmark::LowerLipBottom => "Parte inferior del labio inferior",
            Landmark::ChinBottom => "Mentón (punto más bajo)",
            Landmark::LeftChin => "Parte izquierda del mentón",
            Landmark::RightChin => "Parte derecha del mentón",
            Landmark::Hairline => "Hairline / línea del cabello",
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{} {}", self.index(), self.name())
    }
}

/// Landmarks recorded for one photograph, in canonical order.
///
/// Recording is append-only; a recorded landmark is never edited in place.
/// Scoring requires all [`NUM_LANDMARKS`] points to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    size: ImageSize,
    /// Normalized positions, indexed by `Landmark::index() - 1`.
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            points: Vec::with_capacity(NUM_LANDMARKS),
        }
    }

    /// Build a set from normalized positions in canonical order.
    pub fn from_normalized<I>(size: ImageSize, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut set = Self::new(size);
        for p in points {
            set.record(p)?;
        }
        Ok(set)
    }

    /// Build a set from pixel positions in canonical order.
    pub fn from_pixels<I>(size: ImageSize, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut set = Self::new(size);
        for p in points {
            set.record_pixel(p)?;
        }
        Ok(set)
    }

    /// Parse a landmark document (see [`LandmarkDocument`]).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: LandmarkDocument = serde_json::from_str(json)?;
        doc.into_set()
    }

    /// Load a landmark document from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        LandmarkDocument::load(path)?.into_set()
    }

    pub fn image_size(&self) -> ImageSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == NUM_LANDMARKS
    }

    /// Normalized positions recorded so far.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The landmark the operator should place next, if any.
    pub fn next_landmark(&self) -> Option<Landmark> {
        Landmark::ALL.get(self.points.len()).copied()
    }

    /// Record the next landmark from a normalized position.
    pub fn record(&mut self, p: Point) -> Result<Landmark> {
        let landmark = self.next_landmark().ok_or(Error::SetFull(NUM_LANDMARKS))?;
        if !p.is_finite() {
            return Err(Error::NonFiniteCoordinate {
                index: landmark.index(),
                x: p.x,
                y: p.y,
            });
        }
        self.points.push(p);
        Ok(landmark)
    }

    /// Record the next landmark from a pixel position on the reference image.
    pub fn record_pixel(&mut self, p: Point) -> Result<Landmark> {
        self.record(self.size.normalize(p))
    }

    /// Remove the most recently recorded landmark.
    pub fn pop(&mut self) -> Option<(Landmark, Point)> {
        let p = self.points.pop()?;
        Some((Landmark::ALL[self.points.len()], p))
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Instruction for the operator about what to do next.
    pub fn prompt(&self) -> String {
        match self.next_landmark() {
            Some(next) => format!(
                "Punto {} de {}: Coloca {}",
                next.index(),
                NUM_LANDMARKS,
                next.name()
            ),
            None => format!("¡{} puntos colocados! Haz clic en CALCULAR.", NUM_LANDMARKS),
        }
    }

    /// Fail with `IncompleteSet` unless all landmarks are present.
    pub fn ensure_complete(&self) -> Result<()> {
        match self.next_landmark() {
            None => Ok(()),
            Some(missing) => Err(self.missing(missing)),
        }
    }

    /// Normalized position of the landmark at a 1-based index.
    pub fn normalized(&self, index: usize) -> Result<Point> {
        let landmark = Landmark::from_index(index)?;
        self.points
            .get(index - 1)
            .copied()
            .ok_or_else(|| self.missing(landmark))
    }

    /// Pixel position of the landmark at a 1-based index.
    pub fn resolve(&self, index: usize) -> Result<Point> {
        Ok(self.size.denormalize(self.normalized(index)?))
    }

    pub fn resolve_landmark(&self, landmark: Landmark) -> Result<Point> {
        self.resolve(landmark.index())
    }

    fn missing(&self, landmark: Landmark) -> Error {
        Error::IncompleteSet {
            recorded: self.points.len(),
            required: NUM_LANDMARKS,
            missing: landmark.index(),
            name: landmark.name(),
        }
    }
}

/// Which coordinate space a landmark document's points are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSpace {
    #[default]
    Normalized,
    Pixel,
}

/// On-disk form of a landmark set.
///
/// ```json
/// {
///   "image": { "width": 800, "height": 1000 },
///   "space": "normalized",
///   "landmarks": [ { "x": 0.43, "y": 0.40 }, ... ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkDocument {
    pub image: ImageSize,
    #[serde(default)]
    pub space: CoordinateSpace,
    pub landmarks: Vec<Point>,
}

impl LandmarkDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn into_set(self) -> Result<LandmarkSet> {
        let size = ImageSize::new(self.image.width, self.image.height)?;
        match self.space {
            CoordinateSpace::Normalized => LandmarkSet::from_normalized(size, self.landmarks),
            CoordinateSpace::Pixel => LandmarkSet::from_pixels(size, self.landmarks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> ImageSize {
        ImageSize::new(400, 500).unwrap()
    }

    #[test]
    fn landmark_indices_follow_canonical_order() {
        for (i, landmark) in Landmark::ALL.iter().enumerate() {
            assert_eq!(landmark.index(), i + 1);
            assert_eq!(Landmark::from_index(i + 1).unwrap(), *landmark);
        }
        assert_eq!(Landmark::LeftPupil.name(), "Pupila izquierda");
        assert_eq!(Landmark::Hairline.index(), 22);
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert!(matches!(
            Landmark::from_index(0),
            Err(Error::OutOfRange { index: 0, max: 22 })
        ));
        assert!(matches!(
            Landmark::from_index(23),
            Err(Error::OutOfRange { index: 23, .. })
        ));
    }

    #[test]
    fn resolve_uses_stored_dimensions() {
        let mut set = LandmarkSet::new(size());
        set.record(Point::new(0.25, 0.5)).unwrap();

        let p = set.resolve(1).unwrap();
        assert_eq!(p, Point::new(100.0, 250.0));
    }

    #[test]
    fn resolve_missing_landmark_is_incomplete() {
        let mut set = LandmarkSet::new(size());
        set.record(Point::new(0.1, 0.1)).unwrap();

        match set.resolve(5) {
            Err(Error::IncompleteSet {
                recorded, missing, ..
            }) => {
                assert_eq!(recorded, 1);
                assert_eq!(missing, 5);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(set.resolve(0), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn record_rejects_extra_and_non_finite_points() {
        let mut set = LandmarkSet::new(size());
        assert!(matches!(
            set.record(Point::new(f64::NAN, 0.2)),
            Err(Error::NonFiniteCoordinate { index: 1, .. })
        ));
        assert!(set.is_empty());

        for _ in 0..NUM_LANDMARKS {
            set.record(Point::new(0.5, 0.5)).unwrap();
        }
        assert!(set.is_complete());
        assert!(matches!(
            set.record(Point::new(0.5, 0.5)),
            Err(Error::SetFull(22))
        ));
    }

    #[test]
    fn prompt_tracks_progress() {
        let mut set = LandmarkSet::new(size());
        assert_eq!(set.prompt(), "Punto 1 de 22: Coloca Pupila izquierda");

        set.record(Point::new(0.4, 0.4)).unwrap();
        assert_eq!(set.prompt(), "Punto 2 de 22: Coloca Pupila derecha");

        let (landmark, p) = set.pop().unwrap();
        assert_eq!(landmark, Landmark::LeftPupil);
        assert_eq!(p, Point::new(0.4, 0.4));
        assert_eq!(set.next_landmark(), Some(Landmark::LeftPupil));

        for _ in 0..NUM_LANDMARKS {
            set.record(Point::new(0.5, 0.5)).unwrap();
        }
        assert_eq!(set.prompt(), "¡22 puntos colocados! Haz clic en CALCULAR.");
        assert_eq!(set.next_landmark(), None);
    }

    #[test]
    fn pixel_document_is_normalized() {
        let json = r#"{
            "image": { "width": 400, "height": 500 },
            "space": "pixel",
            "landmarks": [ { "x": 100.0, "y": 250.0 } ]
        }"#;
        let set = LandmarkSet::from_json_str(json).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.points()[0], Point::new(0.25, 0.5));
        assert_eq!(set.resolve(1).unwrap(), Point::new(100.0, 250.0));
    }

    #[test]
    fn document_rejects_zero_sized_image() {
        let json = r#"{ "image": { "width": 0, "height": 500 }, "landmarks": [] }"#;
        assert!(matches!(
            LandmarkSet::from_json_str(json),
            Err(Error::InvalidImageSize { .. })
        ));
    }
}
