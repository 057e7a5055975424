/// Tolerances for comparing geometric quantities.
///
/// `linear` bounds distance comparisons in model units; `angular` bounds
/// angle comparisons in radians. Pass a `Tolerance` explicitly wherever a
/// computation needs to decide whether two points or angles coincide.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    pub linear: f64,
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self::new(Self::DEFAULT_LINEAR, Self::DEFAULT_ANGULAR)
    }

    /// Relaxed tolerance for comparisons dominated by accumulated
    /// floating-point drift (e.g. long walks of repeated additions).
    pub fn loose() -> Self {
        Self::new(1e-4, 1e-6)
    }

    pub fn tight() -> Self {
        Self::new(1e-10, 1e-12)
    }

    /// Whether two lengths/coordinates are equal within linear tolerance.
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Whether a length/coordinate is zero within linear tolerance.
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Whether two angles are equal within angular tolerance.
    pub fn angular_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
