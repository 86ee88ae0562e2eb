//! Destination address validation at the inbound boundary.

use std::sync::LazyLock;

use regex::Regex;

// Colombian street nomenclature, e.g. "Cll 123 #34-23" or "Carrera 7".
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(Cll|Calle|Cra|Kra|Carrera|Diag|Diagonal|Av|Avenida|Transversal)\s+\d+(\s*#\s*\d+(-\d+)?)?$",
    )
    .expect("address pattern is valid")
});

/// Returns true when the destination matches the recognized postal address
/// nomenclature.
///
/// Checked once at the HTTP boundary; the aggregate itself never re-checks
/// the format.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address.trim())
}
