use crate::error::{GeometryError, Result};
use crate::math::{remap, Point3, Vector3, TOLERANCE};
use crate::parametric::{
    ArcLength, DomainBounds, EndValues, Parametric, SectionPrimitive, Sectionable,
};

/// A circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The arc sweeps from `start_angle` to `end_angle`
/// (in radians) around the normal axis.
///
/// Its domain is the angle range it was created with, so a fresh arc is
/// parameterized by angle. Sectioning keeps that domain and narrows the
/// swept angles instead; evaluating outside the domain keeps going around
/// the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
    lower: f64,
    upper: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians (must differ from `start_angle`)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the sweep is empty,
    /// the normal is zero-length, or the reference direction is not
    /// perpendicular to the normal.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        if (end_angle - start_angle).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be non-zero".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
            lower: start_angle,
            upper: end_angle,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the angle the arc starts at.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the angle the arc ends at.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Signed swept angle; negative for a clockwise arc.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns whether the arc covers the full circle.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        (self.sweep().abs() - std::f64::consts::TAU).abs() < TOLERANCE
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }

    fn angle_at(&self, t: f64) -> f64 {
        remap(self.lower, self.upper, self.start_angle, self.end_angle, t)
    }

    fn point_at_angle(&self, angle: f64) -> Point3 {
        let x = self.radius * angle.cos();
        let y = self.radius * angle.sin();
        self.center + self.ref_dir * x + self.binormal() * y
    }
}

impl Parametric for Arc {
    type Scalar = f64;
    type Codomain = Point3;

    fn at_param(&self, t: f64) -> Point3 {
        self.point_at_angle(self.angle_at(t))
    }
}

impl DomainBounds for Arc {
    fn domain_lower(&self) -> f64 {
        self.lower
    }

    fn domain_upper(&self) -> f64 {
        self.upper
    }
}

impl EndValues for Arc {
    fn at_start(&self) -> Point3 {
        self.point_at_angle(self.start_angle)
    }

    fn at_end(&self) -> Point3 {
        self.point_at_angle(self.end_angle)
    }
}

impl Sectionable for Arc {
    const PRIMITIVE: SectionPrimitive = SectionPrimitive::Section;

    fn section(&self, from: f64, to: f64) -> Self {
        Self {
            start_angle: self.angle_at(from),
            end_angle: self.angle_at(to),
            ..self.clone()
        }
    }
}

impl ArcLength for Arc {
    fn arc_length(&self, _epsilon: f64) -> f64 {
        self.radius * self.sweep().abs()
    }

    fn arc_length_to_param(&self, length: f64, _epsilon: f64) -> f64 {
        let total = self.arc_length(0.0);
        if total < TOLERANCE {
            return self.lower;
        }
        self.lower + (self.upper - self.lower) * length / total
    }
}
