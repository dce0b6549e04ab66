//! Layer filter construction.

use ozone_calendar::CalendarMonth;
use ozone_features::{PROP_MONTH, PROP_ZONE};

use crate::expr::Expression;
use crate::zone::ZoneSelector;

/// Builds the layer filter for a zone and month.
///
/// The month clause is always present and always first; the zone clause is
/// added only for a specific zone. Both sides compare `to-string` of the
/// property so numeric zone identifiers still match.
///
/// ```ignore
/// // ["all", ["==", ["to-string", ["get", "Month"]], "2024-03"],
/// //         ["==", ["to-string", ["get", "Zone"]], "LondonZone"]]
/// let f = build_filter(&ZoneSelector::from("LondonZone"), &"2024-03".parse()?);
/// ```
pub fn build_filter(zone: &ZoneSelector, month: &CalendarMonth) -> Expression {
    let mut clauses = vec![property_equals(PROP_MONTH, month.to_string())];
    if let Some(zone) = zone.zone() {
        clauses.push(property_equals(PROP_ZONE, zone.to_string()));
    }
    Expression::all(clauses)
}

fn property_equals(property: &str, value: String) -> Expression {
    Expression::equals(
        Expression::to_string_of(Expression::get(property)),
        Expression::literal(value),
    )
}
