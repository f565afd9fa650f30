use civic_core::priority::PriorityFactors;

/// Read priority factors from raw form strings the way the engine does:
/// an unrecognized level is logged and then weighed as low.
pub fn form_factors(
    severity: &str,
    affected_people: u32,
    duration_hours: u32,
    area_importance: &str,
) -> PriorityFactors {
    let factors = PriorityFactors::from_form(severity, affected_people, duration_hours, area_importance);
    if factors.severity.is_none() {
        tracing::warn!(severity, "unrecognized severity scored as low");
    }
    if factors.area_importance.is_none() {
        tracing::warn!(area_importance, "unrecognized area importance scored as low");
    }
    factors
}
