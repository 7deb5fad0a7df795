// ABOUTME: Payload shapes for ordinary user messages: text, image, voice, video, location and link.

use std::fmt;

use serde::Deserialize;

use crate::de::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextMessage {
    #[serde(rename = "Content", default)]
    content: String,
}

impl TextMessage {
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for TextMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Content: {:?}", self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageMessage {
    #[serde(rename = "PicUrl", default)]
    pic_url: String,
    #[serde(rename = "MediaId", default)]
    media_id: String,
}

impl ImageMessage {
    pub fn pic_url(&self) -> &str {
        &self.pic_url
    }

    pub fn media_id(&self) -> &str {
        &self.media_id
    }
}

impl fmt::Display for ImageMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PicURL: {:?}, MediaID: {:?}", self.pic_url, self.media_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VoiceMessage {
    #[serde(rename = "MediaId", default)]
    media_id: String,
    #[serde(rename = "Format", default)]
    format: String,
}

impl VoiceMessage {
    pub fn media_id(&self) -> &str {
        &self.media_id
    }

    /// Audio codec, e.g. `amr`.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl fmt::Display for VoiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaID: {:?}, Format: {:?}", self.media_id, self.format)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoMessage {
    #[serde(rename = "MediaId", default)]
    media_id: String,
    #[serde(rename = "ThumbMediaId", default)]
    thumb_media_id: String,
}

impl VideoMessage {
    pub fn media_id(&self) -> &str {
        &self.media_id
    }

    pub fn thumb_media_id(&self) -> &str {
        &self.thumb_media_id
    }
}

impl fmt::Display for VideoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MediaID: {:?}, ThumbMediaID: {:?}",
            self.media_id, self.thumb_media_id
        )
    }
}

/// A shared location. Coordinates are degrees; north and east are positive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationMessage {
    #[serde(rename = "Location_X", default, deserialize_with = "lenient")]
    latitude: f64,
    #[serde(rename = "Location_Y", default, deserialize_with = "lenient")]
    longitude: f64,
    #[serde(rename = "Scale", default, deserialize_with = "lenient")]
    scale: i32,
    #[serde(rename = "Label", default)]
    label: String,
}

impl LocationMessage {
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Map zoom level.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for LocationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {}, Longitude: {}, Scale: {}, Label: {:?}",
            self.latitude, self.longitude, self.scale, self.label
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkMessage {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Url", default)]
    url: String,
    #[serde(rename = "PicUrl", default)]
    pic_url: String,
}

impl LinkMessage {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pic_url(&self) -> &str {
        &self.pic_url
    }
}

impl fmt::Display for LinkMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {:?}, Description: {:?}, URL: {:?}, PicURL: {:?}",
            self.title, self.description, self.url, self.pic_url
        )
    }
}
