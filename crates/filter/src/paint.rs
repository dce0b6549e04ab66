//! Circle paint expressions for the ozone layer.

use ozone_features::{OzoneBand, PROP_OZONE, RADIUS_STOPS};

use crate::expr::Expression;

/// `["to-number", ["get", "Ozone"]]`
pub fn ozone_number() -> Expression {
    Expression::to_number_of(Expression::get(PROP_OZONE))
}

/// Marker colour by [`OzoneBand`], highest band as the fallback.
pub fn circle_color_expression() -> Expression {
    let branches = OzoneBand::ALL
        .into_iter()
        .filter_map(|band| {
            band.upper_bound().map(|max| {
                (
                    Expression::less_or_equal(ozone_number(), Expression::literal(max)),
                    Expression::literal(band.colour()),
                )
            })
        })
        .collect();
    Expression::Case {
        branches,
        fallback: Box::new(Expression::literal(OzoneBand::Unhealthy.colour())),
    }
}

/// Marker radius interpolated over [`RADIUS_STOPS`].
pub fn circle_radius_expression() -> Expression {
    Expression::InterpolateLinear {
        input: Box::new(ozone_number()),
        stops: RADIUS_STOPS.to_vec(),
    }
}
