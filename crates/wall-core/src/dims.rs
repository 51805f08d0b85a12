//! Dimensional parameters and the validated geometry derived from them.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, WallError};
use crate::types::{BrickKind, BrickSpec};
use crate::units::Length;

/// Raw dimensional parameters of a wall, its bricks and the robot stride.
///
/// Values are deserialized from millimetre floats; see [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length of a full stretcher brick.
    #[serde(default = "default_full_length")]
    pub full_length: Length,
    /// Length of a half brick.
    #[serde(default = "default_half_length")]
    pub half_length: Length,
    /// Height of every brick.
    #[serde(default = "default_brick_height")]
    pub brick_height: Length,
    /// Depth of every brick; the exposed length of a header.
    #[serde(default = "default_brick_depth")]
    pub brick_depth: Length,
    /// Vertical mortar joint between bricks of one course.
    #[serde(default = "default_head_joint")]
    pub head_joint: Length,
    /// Horizontal mortar joint between courses.
    #[serde(default = "default_bed_joint")]
    pub bed_joint: Length,
    /// Total wall width.
    #[serde(default = "default_wall_width")]
    pub wall_width: Length,
    /// Total wall height.
    #[serde(default = "default_wall_height")]
    pub wall_height: Length,
    /// Width of the robot's reachable envelope.
    #[serde(default = "default_stride_width")]
    pub stride_width: Length,
    /// Height of the robot's reachable envelope.
    #[serde(default = "default_stride_height")]
    pub stride_height: Length,
}

fn default_full_length() -> Length {
    Length::from_mm(210)
}

fn default_half_length() -> Length {
    Length::from_mm(100)
}

fn default_brick_height() -> Length {
    Length::from_mm(50)
}

fn default_brick_depth() -> Length {
    Length::from_mm(100)
}

fn default_head_joint() -> Length {
    Length::from_mm(10)
}

fn default_bed_joint() -> Length {
    Length::from_tenths(125)
}

fn default_wall_width() -> Length {
    Length::from_mm(2300)
}

fn default_wall_height() -> Length {
    Length::from_mm(2000)
}

fn default_stride_width() -> Length {
    Length::from_mm(800)
}

fn default_stride_height() -> Length {
    Length::from_mm(1300)
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            full_length: default_full_length(),
            half_length: default_half_length(),
            brick_height: default_brick_height(),
            brick_depth: default_brick_depth(),
            head_joint: default_head_joint(),
            bed_joint: default_bed_joint(),
            wall_width: default_wall_width(),
            wall_height: default_wall_height(),
            stride_width: default_stride_width(),
            stride_height: default_stride_height(),
        }
    }
}

impl Dimensions {
    /// Returns a copy with a different wall size.
    pub fn with_wall(mut self, width: Length, height: Length) -> Self {
        self.wall_width = width;
        self.wall_height = height;
        self
    }

    /// Returns a copy with a different stride envelope.
    pub fn with_stride(mut self, width: Length, height: Length) -> Self {
        self.stride_width = width;
        self.stride_height = height;
        self
    }

    /// Validates the parameters and derives the immutable geometry.
    ///
    /// With `allow_partial_stride == false` a stride envelope larger than the
    /// wall in either axis is rejected instead of being clipped.
    pub fn validate(&self, allow_partial_stride: bool) -> Result<WallGeometry, WallError> {
        let named = [
            ("full_length", self.full_length),
            ("half_length", self.half_length),
            ("brick_height", self.brick_height),
            ("brick_depth", self.brick_depth),
            ("head_joint", self.head_joint),
            ("bed_joint", self.bed_joint),
            ("wall_width", self.wall_width),
            ("wall_height", self.wall_height),
            ("stride_width", self.stride_width),
            ("stride_height", self.stride_height),
        ];
        for (name, value) in named {
            if value.is_zero() {
                return Err(invalid(
                    ErrorInfo::new("non-positive", format!("{name} must be positive"))
                        .with_context("parameter", name),
                ));
            }
        }

        let course_height = checked_sum("course_height", self.brick_height, self.bed_joint)?;
        let course_count = self.wall_height.exact_div(course_height).ok_or_else(|| {
            invalid(
                ErrorInfo::new(
                    "height-not-course-multiple",
                    "wall height is not an integer multiple of the course height",
                )
                .with_context("wall_height", self.wall_height)
                .with_context("course_height", course_height),
            )
        })?;

        let half_module = checked_sum("half_module", self.half_length, self.head_joint)?;
        let full_module = checked_sum("full_module", self.full_length, self.head_joint)?;
        if half_module.checked_mul(2) != Some(full_module) {
            return Err(invalid(
                ErrorInfo::new(
                    "module-mismatch",
                    "a full brick plus joint must equal two half bricks plus joints",
                )
                .with_context("full_module", full_module)
                .with_context("half_module", half_module),
            ));
        }
        let quarter_module = half_module.exact_half().ok_or_else(|| {
            invalid(
                ErrorInfo::new(
                    "quarter-module",
                    "half module cannot be split into quarter modules",
                )
                .with_context("half_module", half_module),
            )
        })?;
        if quarter_module <= self.head_joint {
            return Err(invalid(
                ErrorInfo::new(
                    "closer-too-short",
                    "a queen closer would have no length left after its joint",
                )
                .with_context("quarter_module", quarter_module),
            ));
        }
        if self.brick_depth != self.half_length {
            return Err(invalid(
                ErrorInfo::new(
                    "header-module",
                    "brick depth must equal the half brick length so headers fill a half module",
                )
                .with_context("brick_depth", self.brick_depth)
                .with_context("half_length", self.half_length),
            ));
        }

        let laid_width = checked_sum("laid_width", self.wall_width, self.head_joint)?;
        let quarter_modules = laid_width.exact_div(quarter_module).ok_or_else(|| {
            invalid(
                ErrorInfo::new(
                    "width-not-module-multiple",
                    "wall width plus one joint is not a whole number of quarter modules",
                )
                .with_context("wall_width", self.wall_width)
                .with_context("quarter_module", quarter_module)
                .with_hint("pick a width of n * half_module - head_joint"),
            )
        })?;
        if quarter_modules % 2 != 0 {
            return Err(invalid(
                ErrorInfo::new(
                    "width-not-half-module",
                    "wall width must be a whole number of half modules",
                )
                .with_context("quarter_modules", quarter_modules),
            ));
        }
        let half_modules = quarter_modules / 2;
        if half_modules < 4 {
            return Err(invalid(
                ErrorInfo::new("wall-too-narrow", "a course must fit at least two full bricks")
                    .with_context("half_modules", half_modules),
            ));
        }

        if !allow_partial_stride
            && (self.stride_width > self.wall_width || self.stride_height > self.wall_height)
        {
            return Err(invalid(
                ErrorInfo::new(
                    "stride-exceeds-wall",
                    "stride envelope is larger than the wall and partial coverage is disabled",
                )
                .with_context("stride_width", self.stride_width)
                .with_context("stride_height", self.stride_height),
            ));
        }

        Ok(WallGeometry {
            dims: *self,
            course_height,
            course_count,
            quarter_module,
            quarter_modules,
        })
    }
}

fn invalid(info: ErrorInfo) -> WallError {
    WallError::InvalidDimensions(info)
}

fn checked_sum(derived: &str, a: Length, b: Length) -> Result<Length, WallError> {
    a.checked_add(b).ok_or_else(|| {
        invalid(
            ErrorInfo::new(
                "dimension-overflow",
                format!("{derived} exceeds the representable length range"),
            )
            .with_context("derived", derived)
            .with_context("lhs", a)
            .with_context("rhs", b),
        )
    })
}

/// Validated, immutable dimensional model with derived values.
///
/// Horizontal positions inside a course are expressed in quarter modules: a
/// quarter module is a quarter brick plus its share of joint, so every head
/// joint lands on an integer quarter index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallGeometry {
    dims: Dimensions,
    course_height: Length,
    course_count: u32,
    quarter_module: Length,
    quarter_modules: u32,
}

impl WallGeometry {
    /// Validates the default dimensions.
    pub fn standard() -> Result<Self, WallError> {
        Dimensions::default().validate(true)
    }

    /// Raw parameters this geometry was derived from.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    /// Brick height plus bed joint.
    pub fn course_height(&self) -> Length {
        self.course_height
    }

    /// Number of courses in the wall.
    pub fn course_count(&self) -> u32 {
        self.course_count
    }

    /// Width of a quarter module.
    pub fn quarter_module(&self) -> Length {
        self.quarter_module
    }

    /// Number of quarter modules across the wall (counting one trailing joint).
    pub fn quarter_modules(&self) -> u32 {
        self.quarter_modules
    }

    /// Number of half modules across the wall.
    pub fn half_modules(&self) -> u32 {
        self.quarter_modules / 2
    }

    /// Half brick length plus one head joint.
    pub fn half_module(&self) -> Length {
        self.quarter_module * 2
    }

    /// Full brick length plus one head joint.
    pub fn full_module(&self) -> Length {
        self.quarter_module * 4
    }

    /// Inclusive bounds on the number of bricks in a course built from full
    /// and half bricks only.
    pub fn bricks_per_course_bounds(&self) -> (u32, u32) {
        let half = self.half_modules();
        (half.div_ceil(2), half)
    }

    /// Rough brick count for a course laid mostly with full bricks.
    pub fn bricks_per_full_course(&self) -> u32 {
        self.bricks_per_course_bounds().0
    }

    /// Stride grid shape as `(rows, columns)`.
    pub fn stride_grid_shape(&self) -> (u32, u32) {
        let rows = self
            .dims
            .wall_height
            .div_ceil(self.dims.stride_height)
            .unwrap_or(0);
        let cols = self
            .dims
            .wall_width
            .div_ceil(self.dims.stride_width)
            .unwrap_or(0);
        (rows, cols)
    }

    /// Horizontal offset of a quarter index from the wall origin.
    pub fn quarter_x(&self, quarter: u32) -> Length {
        self.quarter_module * quarter
    }

    /// Vertical offset of a course from the wall origin.
    pub fn course_y(&self, course: u32) -> Length {
        self.course_height * course
    }

    /// Nominal specification of a brick class.
    pub fn brick_spec(&self, kind: BrickKind) -> BrickSpec {
        let length = match kind {
            BrickKind::Full => self.dims.full_length,
            BrickKind::Half => self.dims.half_length,
            BrickKind::Header => self.dims.brick_depth,
            BrickKind::ThreeQuarter | BrickKind::QueenCloser => {
                self.quarter_module * kind.quarters() - self.dims.head_joint
            }
        };
        BrickSpec {
            kind,
            length,
            height: self.dims.brick_height,
            depth: self.dims.brick_depth,
        }
    }
}
