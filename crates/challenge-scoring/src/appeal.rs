//! Request-appeal gates.
//!
//! Appeal is the host's composite of enjoyment and price factor. Two thresholds
//! apply: one decides whether a candidate is offered at all, the other whether
//! the search counts as a success for the failure tracker.

/// `appeal >= threshold`. NaN is never appealing.
pub fn is_appealing(appeal: f64, threshold: f64) -> bool {
    appeal >= threshold
}

/// Drop a request candidate whose appeal is below `threshold`.
///
/// Returns the surviving candidate and its appeal; a dropped candidate reports
/// an appeal of 0.
pub fn gate_candidate<T>(candidate: Option<T>, appeal: f64, threshold: f64) -> (Option<T>, f64) {
    match candidate {
        Some(c) if is_appealing(appeal, threshold) => (Some(c), appeal),
        Some(_) => (None, 0.0),
        None => (None, appeal),
    }
}

/// Whether a request search found a good product: a candidate exists and its
/// appeal meets `threshold`.
pub fn request_succeeded(found_candidate: bool, appeal: f64, threshold: f64) -> bool {
    found_candidate && is_appealing(appeal, threshold)
}
