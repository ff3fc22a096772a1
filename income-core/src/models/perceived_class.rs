/// Self-identification choices offered by the questionnaire.
///
/// The core never interprets a perception beyond the literal string checks in
/// the insight rules, so callers may pass any text. These are the options the
/// questionnaire presents.
pub const PERCEIVED_CLASS_OPTIONS: [&str; 6] = [
    "Below Poverty Line",
    "Lower Class",
    "Lower Middle Class",
    "Middle Class",
    "Upper Middle Class",
    "Upper Class",
];

/// Returns `true` if `perception` is one of [`PERCEIVED_CLASS_OPTIONS`].
pub fn is_known_perception(perception: &str) -> bool {
    PERCEIVED_CLASS_OPTIONS.contains(&perception)
}
