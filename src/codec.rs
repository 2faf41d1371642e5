//! Image Codec
//!
//! Binary image <-> data URL conversion, plus the browser-side file readers
//! and preview URL handles used by the forms.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::try_join_all;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::error::FormError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// `data:<type>;base64,<payload>`
pub fn to_data_url(bytes: &[u8], content_type: &str) -> String {
    let content_type = if content_type.is_empty() { FALLBACK_CONTENT_TYPE } else { content_type };
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

/// Read one selected file into a data URL
pub async fn read_as_data_url(file: File) -> Result<String, FormError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| FormError::ImageProcessing(format!("{}: {:?}", file.name(), e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(to_data_url(&bytes, &file.type_()))
}

/// Encode a whole batch concurrently. Resolves only once every file is
/// done, so callers never see a partial batch.
pub async fn encode_files(files: Vec<File>) -> Result<Vec<String>, FormError> {
    try_join_all(files.into_iter().map(read_as_data_url)).await
}

/// Collect the files out of an `<input type="file">` list
pub fn files_from_list(list: Option<web_sys::FileList>) -> Vec<File> {
    let Some(list) = list else { return Vec::new() };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Owned `blob:` preview URL, revoked when dropped
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn for_file(file: &File) -> Result<Self, FormError> {
        web_sys::Url::create_object_url_with_blob(file)
            .map(ObjectUrl)
            .map_err(|e| FormError::ImageProcessing(format!("{:?}", e)))
    }
}

impl AsRef<str> for ObjectUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url(b"hi", "image/png"), "data:image/png;base64,aGk=");
        assert_eq!(to_data_url(&[], "image/gif"), "data:image/gif;base64,");
    }

    #[test]
    fn test_missing_content_type_falls_back() {
        assert_eq!(to_data_url(&[0], ""), "data:application/octet-stream;base64,AA==");
    }
}
