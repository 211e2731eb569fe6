use gather_types::Payload;

/// Append `payload` to the end of `acc` and hand the sequence back.
///
/// Shaped as a fold step: `kept.fold(Vec::new(), aggregate)`.
#[must_use]
pub fn aggregate(mut acc: Vec<Payload>, payload: Payload) -> Vec<Payload> {
    acc.push(payload);
    acc
}
