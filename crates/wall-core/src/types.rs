use serde::{Deserialize, Serialize};

use crate::units::Length;

/// Length class of a brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrickKind {
    /// Full stretcher brick.
    Full,
    /// Half bat laid as a stretcher.
    Half,
    /// Whole brick laid end-on; exposes its depth.
    Header,
    /// Three-quarter bat.
    ThreeQuarter,
    /// Quarter closer.
    QueenCloser,
}

impl BrickKind {
    /// Number of quarter modules the brick and its trailing joint occupy.
    pub fn quarters(self) -> u32 {
        match self {
            BrickKind::Full => 4,
            BrickKind::ThreeQuarter => 3,
            BrickKind::Half | BrickKind::Header => 2,
            BrickKind::QueenCloser => 1,
        }
    }

    /// Face exposed on the wall surface.
    pub fn orientation(self) -> Orientation {
        match self {
            BrickKind::Header => Orientation::Header,
            _ => Orientation::Stretcher,
        }
    }

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            BrickKind::Full => "full",
            BrickKind::Half => "half",
            BrickKind::Header => "header",
            BrickKind::ThreeQuarter => "three-quarter",
            BrickKind::QueenCloser => "queen-closer",
        }
    }
}

/// Which face of the brick is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Long face exposed.
    Stretcher,
    /// End face exposed.
    Header,
}

/// Nominal size of a brick class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickSpec {
    /// Length class.
    pub kind: BrickKind,
    /// Exposed length along the course.
    pub length: Length,
    /// Height of the brick.
    pub height: Length,
    /// Depth into the wall.
    pub depth: Length,
}

/// Dense identifier of a brick; ids are assigned bottom course first, then
/// left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrickId(u32);

impl BrickId {
    /// Creates an identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns the identifier as a vector index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Axis-aligned rectangle in wall coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Left edge.
    pub x: Length,
    /// Bottom edge.
    pub y: Length,
    /// Horizontal extent.
    pub width: Length,
    /// Vertical extent.
    pub height: Length,
}

impl Footprint {
    /// Right edge.
    pub fn right(&self) -> Length {
        self.x + self.width
    }

    /// Top edge.
    pub fn top(&self) -> Length {
        self.y + self.height
    }

    /// Centroid in tenths of a millimetre, doubled to stay integral.
    pub fn doubled_centroid(&self) -> (u64, u64) {
        (
            2 * u64::from(self.x.tenths()) + u64::from(self.width.tenths()),
            2 * u64::from(self.y.tenths()) + u64::from(self.height.tenths()),
        )
    }

    /// Centroid in millimetres.
    pub fn centroid_mm(&self) -> (f64, f64) {
        (
            self.x.as_mm() + self.width.as_mm() / 2.0,
            self.y.as_mm() + self.height.as_mm() / 2.0,
        )
    }

    /// Whether the open interiors of the two rectangles intersect.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }

    /// Whether the open horizontal spans intersect.
    pub fn spans_overlap(&self, other: &Footprint) -> bool {
        self.x < other.right() && other.x < self.right()
    }
}

/// A single placed brick. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    /// Stable identifier.
    pub id: BrickId,
    /// Course the brick belongs to (0 is the bottom course).
    pub course: u32,
    /// Position within the course, left to right.
    pub index_in_course: u32,
    /// Nominal size.
    pub spec: BrickSpec,
    /// Exposed face.
    pub orientation: Orientation,
    /// Left edge from the wall origin.
    pub x: Length,
    /// Bottom edge from the wall origin.
    pub y: Length,
}

impl Brick {
    /// Length class shortcut.
    pub fn kind(&self) -> BrickKind {
        self.spec.kind
    }

    /// Face rectangle on the wall surface.
    pub fn footprint(&self) -> Footprint {
        Footprint {
            x: self.x,
            y: self.y,
            width: self.spec.length,
            height: self.spec.height,
        }
    }
}

/// One horizontal row of bricks spanning the wall width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course index (0 is the bottom course).
    pub index: u32,
    /// Vertical offset of the course.
    pub y: Length,
    /// Bricks ordered left to right.
    pub bricks: Vec<Brick>,
}

impl Course {
    /// Total laid width: brick lengths plus the joints between them.
    pub fn laid_width(&self, head_joint: Length) -> Length {
        let bricks: Length = self
            .bricks
            .iter()
            .fold(Length::ZERO, |acc, brick| acc + brick.spec.length);
        let joints = head_joint * (self.bricks.len().saturating_sub(1) as u32);
        bricks + joints
    }

    /// Left edges of the interior head joints, left to right.
    pub fn head_joints(&self) -> Vec<Length> {
        let count = self.bricks.len().saturating_sub(1);
        self.bricks
            .iter()
            .take(count)
            .map(|brick| brick.footprint().right())
            .collect()
    }
}
