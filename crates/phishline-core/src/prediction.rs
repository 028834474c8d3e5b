//! Classification verdict for a single email

/// Label produced by the backend for one classify call.
///
/// The text is opaque: it is displayed verbatim, never parsed or validated
/// beyond being a string. Overwritten by the next call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub label: String,
}

impl Prediction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
