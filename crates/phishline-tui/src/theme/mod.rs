//! Look and feel, split into raw colors (`palette`) and the semantic
//! styles built from them (`styles`). Widgets should reach for `styles`
//! and only fall back to `palette` for one-off fills.

pub mod palette;
pub mod styles;
