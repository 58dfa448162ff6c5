//! Service categorization and display naming

use super::schema::ServiceCategory;

/// Substring rules checked in order; the first category with a matching
/// keyword wins.
const CATEGORY_RULES: [(ServiceCategory, &[&str]); 5] = [
    (
        ServiceCategory::Simulator,
        &["simulator", "custodian", "exchange", "market-data"],
    ),
    (ServiceCategory::Monitoring, &["monitor", "audit"]),
    (ServiceCategory::Trading, &["trading", "engine"]),
    (ServiceCategory::Orchestration, &["coordinator"]),
    (ServiceCategory::Infrastructure, &["infra"]),
];

pub fn categorize(service_type: &str) -> ServiceCategory {
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| service_type.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(ServiceCategory::Other)
}

/// Human-readable label for a short name: `risk-monitor-lh` -> `Risk Monitor Lh`
///
/// A letter is upper-cased when it follows a non-letter and lower-cased
/// otherwise, so digits also start a new word (`okx2a` -> `Okx2A`).
pub fn display_name(short_name: &str) -> String {
    let mut name = String::with_capacity(short_name.len());
    let mut prev_is_letter = false;

    for c in short_name.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            name.push(c);
            prev_is_letter = false;
        }
    }

    name
}
