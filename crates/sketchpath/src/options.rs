//! Drawing options shared by every primitive.
//!
//! Options are read-only inputs. Tunables whose defaults depend on other
//! fields (`hachure_gap`, `fill_weight`) are optional and resolved once at
//! the start of the operation that needs them.

/// Configuration for sketchy path generation.
///
/// Based on RoughJS options: roughness, bowing, randomness offset, curve
/// fitting and hachure fill parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct DrawOptions {
    /// Multiplier on every random offset (0.0 = exact geometry)
    pub roughness: f64,
    /// How far lines bow away from straight, relative to their length
    pub bowing: f64,
    /// Maximum endpoint jitter in pixels (`None` = no jitter)
    pub max_randomness_offset: Option<f64>,
    /// Ellipse points per quarter turn
    pub curve_step_count: f64,
    /// 0.0 = Catmull-Rom curve, 1.0 = straight segments between points
    pub curve_tightness: f64,
    /// Stroke width of outlines
    pub stroke_width: f64,
    /// Angle of hachure lines in degrees
    pub hachure_angle: f64,
    /// Distance between hachure lines (`None` = four stroke widths)
    pub hachure_gap: Option<f64>,
    /// Stroke width of hachure lines (`None` = half the stroke width)
    pub fill_weight: Option<f64>,
}

/// Smallest spacing allowed between hachure lines.
pub const MIN_HACHURE_GAP: f64 = 0.1;

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: Some(2.0),
            curve_step_count: 9.0,
            curve_tightness: 0.0,
            stroke_width: 1.0,
            hachure_angle: -41.0,
            hachure_gap: None,
            fill_weight: None,
        }
    }
}

impl DrawOptions {
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_bowing(mut self, bowing: f64) -> Self {
        self.bowing = bowing;
        self
    }

    pub fn with_max_randomness_offset(mut self, offset: f64) -> Self {
        self.max_randomness_offset = Some(offset);
        self
    }

    pub fn with_curve_step_count(mut self, count: f64) -> Self {
        self.curve_step_count = count;
        self
    }

    pub fn with_curve_tightness(mut self, tightness: f64) -> Self {
        self.curve_tightness = tightness;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_hachure_angle(mut self, degrees: f64) -> Self {
        self.hachure_angle = degrees;
        self
    }

    pub fn with_hachure_gap(mut self, gap: f64) -> Self {
        self.hachure_gap = Some(gap);
        self
    }

    pub fn with_fill_weight(mut self, weight: f64) -> Self {
        self.fill_weight = Some(weight);
        self
    }

    /// Endpoint jitter magnitude, zero when unset.
    #[inline]
    pub fn randomness_offset(&self) -> f64 {
        self.max_randomness_offset.unwrap_or(0.0)
    }

    /// Spacing between hachure lines.
    ///
    /// Absent or negative gaps fall back to four stroke widths, and the
    /// result never drops below [`MIN_HACHURE_GAP`].
    pub fn resolved_hachure_gap(&self) -> f64 {
        self.hachure_gap
            .filter(|gap| *gap >= 0.0)
            .unwrap_or(self.stroke_width * 4.0)
            .max(MIN_HACHURE_GAP)
    }

    /// Stroke width for hachure lines; absent or negative falls back to half
    /// the stroke width.
    pub fn resolved_fill_weight(&self) -> f64 {
        self.fill_weight
            .filter(|weight| *weight >= 0.0)
            .unwrap_or(self.stroke_width / 2.0)
    }

    /// Angular distance between consecutive ellipse points.
    ///
    /// A quarter turn is split into `curve_step_count` steps. Fractional
    /// counts are honoured; zero, negative and non-finite counts mean one.
    pub fn ellipse_increment(&self) -> f64 {
        let steps = if self.curve_step_count.is_finite() && self.curve_step_count > 0.0 {
            self.curve_step_count
        } else {
            1.0
        };
        std::f64::consts::FRAC_PI_2 / steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_defaults_to_four_stroke_widths() {
        let o = DrawOptions::default().with_stroke_width(2.5);
        assert_eq!(o.resolved_hachure_gap(), 10.0);
    }

    #[test]
    fn negative_gap_uses_fallback() {
        let o = DrawOptions::default().with_hachure_gap(-1.0).with_stroke_width(0.5);
        assert_eq!(o.resolved_hachure_gap(), 2.0);
    }

    #[test]
    fn gap_is_floored() {
        let o = DrawOptions::default().with_hachure_gap(0.0);
        assert_eq!(o.resolved_hachure_gap(), MIN_HACHURE_GAP);
        let o = DrawOptions::default().with_stroke_width(0.0);
        assert_eq!(o.resolved_hachure_gap(), MIN_HACHURE_GAP);
    }

    #[test]
    fn fill_weight_fallback() {
        let o = DrawOptions::default().with_stroke_width(3.0);
        assert_eq!(o.resolved_fill_weight(), 1.5);
        assert_eq!(o.clone().with_fill_weight(-2.0).resolved_fill_weight(), 1.5);
        assert_eq!(o.with_fill_weight(0.75).resolved_fill_weight(), 0.75);
    }

    #[test]
    fn missing_offset_is_zero() {
        let o = DrawOptions {
            max_randomness_offset: None,
            ..DrawOptions::default()
        };
        assert_eq!(o.randomness_offset(), 0.0);
    }

    #[test]
    fn zero_step_count_is_clamped() {
        let o = DrawOptions::default().with_curve_step_count(0.0);
        assert_eq!(o.ellipse_increment(), std::f64::consts::FRAC_PI_2);
        let o = DrawOptions::default().with_curve_step_count(-3.0);
        assert_eq!(o.ellipse_increment(), std::f64::consts::FRAC_PI_2);
        let o = DrawOptions::default().with_curve_step_count(f64::NAN);
        assert_eq!(o.ellipse_increment(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn fractional_step_count_widens_increment() {
        let o = DrawOptions::default().with_curve_step_count(0.5);
        assert_eq!(o.ellipse_increment(), std::f64::consts::PI);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_merges_over_defaults() {
        let o: DrawOptions =
            serde_json::from_str(r#"{ "roughness": 2.5, "maxRandomnessOffset": 4 }"#).unwrap();
        assert_eq!(o.roughness, 2.5);
        assert_eq!(o.bowing, 1.0);
        assert_eq!(o.max_randomness_offset, Some(4.0));
        assert_eq!(o.hachure_gap, None);
    }
}
