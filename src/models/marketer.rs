use serde::Deserialize;

/// The part of a marketer record the relay actually reads.
///
/// Everything else in the record is opaque and relayed untouched; only `url`
/// is needed to address the second-stage blog listing request.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MarketerRecord {
    pub url: String,
}
