// File: crates/xyplot-core/src/scale.rs
// Summary: Linear data-to-pixel transform for the X and Y axes.

/// Maps the data interval `[d0, d1]` onto the pixel interval `[p0, p1]`.
/// For Y, pass `p0 = bottom` and `p1 = top` so values grow upwards.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let mut s = Self { d0, d1, p0, p1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        // Halved so ranges wider than f64::MAX do not overflow.
        let t = (v * 0.5 - self.d0 * 0.5) / (self.d1 * 0.5 - self.d0 * 0.5);
        self.p0 + (t as f32) * (self.p1 - self.p0)
    }
}
