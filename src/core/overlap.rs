use chrono::NaiveDate;

/// Inclusive-bounds intersection test.
///
/// Both ends count as occupied, so a stay ending on day D conflicts with one
/// starting on day D even though no night is shared.
pub fn overlaps(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a <= end_b && start_b <= end_a
}
