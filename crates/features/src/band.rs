//! Ozone concentration bands and marker sizing.

/// Air-quality band of a monthly ozone reading (ug/m3).
///
/// Upper bounds are inclusive: 33.0 is still [`OzoneBand::VeryGood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OzoneBand {
    /// 0..=33
    VeryGood,
    /// 34..=54
    Good,
    /// 55..=70
    Moderate,
    /// 71..=85
    UnhealthySensitive,
    /// Above 85
    Unhealthy,
}

impl OzoneBand {
    /// All bands in ascending order.
    pub const ALL: [OzoneBand; 5] = [
        OzoneBand::VeryGood,
        OzoneBand::Good,
        OzoneBand::Moderate,
        OzoneBand::UnhealthySensitive,
        OzoneBand::Unhealthy,
    ];

    /// Classifies a reading.
    pub fn classify(ozone: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| band.upper_bound().is_some_and(|max| ozone <= max))
            .unwrap_or(OzoneBand::Unhealthy)
    }

    /// Inclusive upper bound, `None` for the open-ended top band.
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            OzoneBand::VeryGood => Some(33.0),
            OzoneBand::Good => Some(54.0),
            OzoneBand::Moderate => Some(70.0),
            OzoneBand::UnhealthySensitive => Some(85.0),
            OzoneBand::Unhealthy => None,
        }
    }

    /// Marker colour as a CSS `hsl()` string.
    pub fn colour(self) -> &'static str {
        match self {
            OzoneBand::VeryGood => "hsl(125, 70%, 50%)",
            OzoneBand::Good => "hsl(50, 90%, 55%)",
            OzoneBand::Moderate => "hsl(30, 85%, 60%)",
            OzoneBand::UnhealthySensitive => "hsl(10, 80%, 60%)",
            OzoneBand::Unhealthy => "hsl(280, 70%, 55%)",
        }
    }

    /// Human-readable band name.
    pub fn label(self) -> &'static str {
        match self {
            OzoneBand::VeryGood => "Very Good",
            OzoneBand::Good => "Good",
            OzoneBand::Moderate => "Moderate",
            OzoneBand::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            OzoneBand::Unhealthy => "Unhealthy",
        }
    }
}

/// `(ozone, radius_px)` stops for marker radius interpolation.
pub const RADIUS_STOPS: [(f64, f64); 6] = [
    (0.0, 4.0),
    (33.0, 6.0),
    (54.0, 8.0),
    (70.0, 10.0),
    (85.0, 12.0),
    (97.0, 14.0),
];

/// Marker radius in pixels: linear between [`RADIUS_STOPS`], clamped to the
/// first and last stop outside their range.
pub fn circle_radius(ozone: f64) -> f64 {
    let (first_x, first_y) = RADIUS_STOPS[0];
    let (last_x, last_y) = RADIUS_STOPS[RADIUS_STOPS.len() - 1];
    if ozone <= first_x {
        return first_y;
    }
    if ozone >= last_x {
        return last_y;
    }
    for pair in RADIUS_STOPS.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if ozone <= x1 {
            return y0 + (ozone - x0) * (y1 - y0) / (x1 - x0);
        }
    }
    last_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn classify_bounds_inclusive() {
        assert_eq!(OzoneBand::classify(0.0), OzoneBand::VeryGood);
        assert_eq!(OzoneBand::classify(33.0), OzoneBand::VeryGood);
        assert_eq!(OzoneBand::classify(33.5), OzoneBand::Good);
        assert_eq!(OzoneBand::classify(54.0), OzoneBand::Good);
        assert_eq!(OzoneBand::classify(70.0), OzoneBand::Moderate);
        assert_eq!(OzoneBand::classify(85.0), OzoneBand::UnhealthySensitive);
        assert_eq!(OzoneBand::classify(85.1), OzoneBand::Unhealthy);
        assert_eq!(OzoneBand::classify(300.0), OzoneBand::Unhealthy);
    }

    #[test]
    fn radius_at_stops() {
        for (x, y) in RADIUS_STOPS {
            assert_relative_eq!(circle_radius(x), y);
        }
    }

    #[test]
    fn radius_interpolates() {
        assert_relative_eq!(circle_radius(16.5), 5.0);
        assert_relative_eq!(circle_radius(62.0), 9.0);
    }

    #[test]
    fn radius_clamps() {
        assert_relative_eq!(circle_radius(-5.0), 4.0);
        assert_relative_eq!(circle_radius(150.0), 14.0);
    }
}
