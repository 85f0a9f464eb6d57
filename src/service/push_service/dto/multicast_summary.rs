///
/// Aggregate outcome of one multicast batch. Used for logging only,
/// delivery receipts are out of scope.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct MulticastSummary {
    pub sent: usize,
    pub failed: usize,
}
