//! Platform-neutral complication payloads.
//!
//! A source produces one of these per refresh; the rendering collaborator
//! owns everything after that.

use serde::{Deserialize, Serialize};

/// Widget families a watch face can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplicationType {
    RangedValue,
    ShortText,
}

/// Payload for a bounded-range indicator, typically drawn as a ring or arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangedValueData {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub text: String,
    pub title: Option<String>,
    pub content_description: String,
}

/// Payload for a short text slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTextData {
    pub text: String,
    pub content_description: String,
}

/// Data handed to the rendering collaborator for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComplicationData {
    /// Nothing to show; the slot stays empty.
    NoData,
    RangedValue(RangedValueData),
    ShortText(ShortTextData),
}

impl ComplicationData {
    /// Ranged payload with the minimum pinned at zero.
    #[must_use]
    pub fn ranged(
        value: f32,
        max: f32,
        text: impl Into<String>,
        title: Option<String>,
        content_description: impl Into<String>,
    ) -> Self {
        Self::RangedValue(RangedValueData {
            value,
            min: 0.0,
            max,
            text: text.into(),
            title,
            content_description: content_description.into(),
        })
    }

    #[must_use]
    pub fn short_text(text: impl Into<String>, content_description: impl Into<String>) -> Self {
        Self::ShortText(ShortTextData {
            text: text.into(),
            content_description: content_description.into(),
        })
    }

    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}
