//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

use crate::codec;

/// Car listing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl CarRecord {
    pub fn cover(&self) -> Option<String> {
        self.images.first().and_then(Image::src)
    }
}

/// One stored image. The backend has served both shapes over time, so both
/// are accepted as-is and only resolved when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Image {
    /// Self-contained `data:` URL
    DataUrl(String),
    /// Raw bytes plus MIME type
    Binary(BinaryImage),
    /// Anything else; rendered as the "no image" placeholder
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryImage {
    pub data: ImageBytes,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageBytes {
    Raw(Vec<u8>),
    /// Node `Buffer` JSON form: `{ "type": "Buffer", "data": [...] }`
    Buffer { data: Vec<u8> },
}

impl ImageBytes {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            ImageBytes::Raw(bytes) | ImageBytes::Buffer { data: bytes } => bytes,
        }
    }
}

impl Image {
    /// Value usable as an `<img src>`, if the shape is known
    pub fn src(&self) -> Option<String> {
        match self {
            Image::DataUrl(url) if !url.is_empty() => Some(url.clone()),
            Image::DataUrl(_) => None,
            Image::Binary(img) => Some(codec::to_data_url(img.data.as_slice(), &img.content_type)),
            Image::Other(_) => None,
        }
    }
}

/// Body of `POST /api/car/addcar`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCar {
    pub title: String,
    pub desc: String,
    /// Raw comma-delimited text as typed
    pub tags: String,
    pub images: Vec<String>,
}

/// Fields of `PUT /api/car/updatecar/{id}`, sent as multipart
#[derive(Debug, Clone, PartialEq)]
pub struct CarUpdate {
    pub title: String,
    pub desc: String,
    pub tags: Vec<String>,
    /// Replacement images as data URLs; empty keeps the stored ones
    pub images: Vec<String>,
}

impl CarUpdate {
    pub fn joined_tags(&self) -> String {
        self.tags.join(",")
    }

    /// Apply this update to a local copy of the record
    pub fn apply_to(&self, record: &mut CarRecord) {
        record.title = self.title.clone();
        record.desc = self.desc.clone();
        record.tags = self.tags.clone();
        if !self.images.is_empty() {
            record.images = self.images.iter().cloned().map(Image::DataUrl).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_record_with_both_image_shapes() {
        let json = r#"{
            "_id": "65a1",
            "title": "Civic",
            "desc": "Clean",
            "tags": ["sedan", "honda"],
            "images": [
                "data:image/png;base64,AAAA",
                { "data": [1, 2, 3], "contentType": "image/jpeg" },
                { "data": { "type": "Buffer", "data": [255] }, "contentType": "image/png" }
            ]
        }"#;
        let car: CarRecord = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "65a1");
        assert_eq!(car.tags, vec!["sedan", "honda"]);
        assert_eq!(car.images.len(), 3);
        assert_eq!(car.images[0].src().as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(car.images[1].src().as_deref(), Some("data:image/jpeg;base64,AQID"));
        assert_eq!(car.images[2].src().as_deref(), Some("data:image/png;base64,/w=="));
    }

    #[test]
    fn test_unknown_image_shape_has_no_src() {
        let car: CarRecord = serde_json::from_str(
            r#"{"_id":"1","title":"T","desc":"D","tags":[],"images":[{"url":"x"}, null]}"#,
        )
        .unwrap();
        assert!(car.images.iter().all(|img| img.src().is_none()));
        assert!(car.cover().is_none());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let car: CarRecord = serde_json::from_str(r#"{"id":"7","title":"Bare"}"#).unwrap();
        assert_eq!(car.id, "7");
        assert!(car.tags.is_empty());
        assert!(car.images.is_empty());
        assert!(car.cover().is_none());
    }

    #[test]
    fn test_new_car_serializes_tags_as_raw_string() {
        let body = NewCar {
            title: "Model 3".to_string(),
            desc: "EV".to_string(),
            tags: "electric, sedan".to_string(),
            images: vec!["data:image/png;base64,AA==".to_string()],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["tags"], "electric, sedan");
        assert_eq!(value["images"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_update_keeps_images_when_none_replaced() {
        let mut car = CarRecord {
            id: "1".to_string(),
            title: "Old".to_string(),
            desc: "Old desc".to_string(),
            tags: vec!["a".to_string()],
            images: vec![Image::DataUrl("data:image/png;base64,AA==".to_string())],
        };
        let update = CarUpdate {
            title: "New".to_string(),
            desc: "New desc".to_string(),
            tags: vec!["b".to_string(), "c".to_string()],
            images: vec![],
        };
        update.apply_to(&mut car);
        assert_eq!(car.title, "New");
        assert_eq!(car.tags, vec!["b", "c"]);
        assert_eq!(car.images.len(), 1);
        assert_eq!(update.joined_tags(), "b,c");
    }
}
