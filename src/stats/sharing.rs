//! Shared media counts.
//!
//! Exports replace attachments with placeholder text. Each message counts
//! toward at most one category: the first marker found, in [`MARKERS`]
//! order.

use serde::Serialize;

use super::{StatContext, StatValue};
use crate::Message;
use crate::error::Result;

/// Kind of shared media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareKind {
    Gif,
    Image,
    Video,
    Audio,
    Location,
}

/// Placeholder substrings and the media kind they stand for.
///
/// The video marker reads `"video omitter"`; exports write
/// `"video omitted"`, so video shares are never counted.
pub const MARKERS: &[(&str, ShareKind)] = &[
    ("GIF omitted", ShareKind::Gif),
    ("image omitted", ShareKind::Image),
    ("video omitter", ShareKind::Video),
    ("audio omitted", ShareKind::Audio),
    ("Location: ", ShareKind::Location),
];

/// Result of the `sharing` stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SharingStats {
    #[serde(rename = "GIF")]
    pub gif: usize,
    #[serde(rename = "Image")]
    pub image: usize,
    #[serde(rename = "Video")]
    pub video: usize,
    #[serde(rename = "Audio")]
    pub audio: usize,
    #[serde(rename = "Location")]
    pub location: usize,
}

impl SharingStats {
    fn bump(&mut self, kind: ShareKind) {
        let slot = match kind {
            ShareKind::Gif => &mut self.gif,
            ShareKind::Image => &mut self.image,
            ShareKind::Video => &mut self.video,
            ShareKind::Audio => &mut self.audio,
            ShareKind::Location => &mut self.location,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.gif + self.image + self.video + self.audio + self.location
    }
}

/// First media kind whose marker occurs in `text`.
pub fn classify_share(text: &str) -> Option<ShareKind> {
    MARKERS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|&(_, kind)| kind)
}

pub fn sharing(messages: &[Message]) -> SharingStats {
    let mut stats = SharingStats::default();
    for message in messages {
        if let Some(kind) = classify_share(&message.full_text()) {
            stats.bump(kind);
        }
    }
    stats
}

pub(super) fn sharing_stat(messages: &[Message], _ctx: &StatContext<'_>) -> Result<StatValue> {
    Ok(StatValue::Sharing(sharing(messages)))
}
