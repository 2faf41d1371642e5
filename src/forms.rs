//! Form State
//!
//! Create and edit forms for car listings. `P` is the preview handle kept
//! next to each selected image; dropping it releases the preview.

use crate::codec::ObjectUrl;
use crate::error::FormError;
use crate::models::{CarRecord, CarUpdate, Image, NewCar};

/// Most images one listing may carry
pub const MAX_IMAGES: usize = 10;

/// One picked image: encoded for upload, plus its on-screen preview
#[derive(Debug)]
pub struct SelectedImage<P = ObjectUrl> {
    pub data_url: String,
    pub preview: P,
}

/// Split comma-separated tag text, dropping blanks
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

// ========================
// Create
// ========================

#[derive(Debug)]
pub struct AddCarForm<P = ObjectUrl> {
    pub title: String,
    pub desc: String,
    /// Raw text, submitted as typed
    pub tags: String,
    images: Vec<SelectedImage<P>>,
    uploading: bool,
}

impl<P> Default for AddCarForm<P> {
    fn default() -> Self {
        Self {
            title: String::new(),
            desc: String::new(),
            tags: String::new(),
            images: Vec::new(),
            uploading: false,
        }
    }
}

impl<P> AddCarForm<P> {
    pub fn images(&self) -> &[SelectedImage<P>] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Whether a batch of `n` more images fits
    pub fn can_accept(&self, n: usize) -> Result<(), FormError> {
        if self.images.len() + n > MAX_IMAGES {
            Err(FormError::too_many())
        } else {
            Ok(())
        }
    }

    /// Commit a fully encoded batch. The limit is checked again here since
    /// another batch may have landed while this one was encoding; a rejected
    /// batch is dropped whole, releasing its previews.
    pub fn append(&mut self, batch: Vec<SelectedImage<P>>) -> Result<(), FormError> {
        self.can_accept(batch.len())?;
        self.images.extend(batch);
        Ok(())
    }

    /// Remove one image; its preview is released when the return value drops
    pub fn remove_image(&mut self, index: usize) -> Option<SelectedImage<P>> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.title, "title")?;
        require(&self.desc, "description")?;
        if self.images.is_empty() {
            return Err(FormError::NoImages);
        }
        if self.images.len() > MAX_IMAGES {
            return Err(FormError::too_many());
        }
        Ok(())
    }

    pub fn payload(&self) -> NewCar {
        NewCar {
            title: self.title.clone(),
            desc: self.desc.clone(),
            tags: self.tags.clone(),
            images: self.images.iter().map(|img| img.data_url.clone()).collect(),
        }
    }

    /// Validate and mark in flight. `Busy` means a submit is already running.
    pub fn begin_submit(&mut self) -> Result<NewCar, FormError> {
        if self.uploading {
            return Err(FormError::Busy);
        }
        self.validate()?;
        self.uploading = true;
        Ok(self.payload())
    }

    /// Settle a submit; success resets the form and releases every preview
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.uploading = false;
        if succeeded {
            *self = Self::default();
        }
    }
}

// ========================
// Edit
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub id: String,
    pub title: String,
    pub desc: String,
    /// Comma-separated
    pub tags: String,
    /// Shown as the current image until replacements are picked
    pub current_image: Option<Image>,
}

impl EditForm {
    pub fn from_record(record: &CarRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            desc: record.desc.clone(),
            tags: record.tags.join(", "),
            current_image: record.images.first().cloned(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.title, "title")?;
        require(&self.desc, "description")
    }

    /// Build the update once every replacement image is encoded
    pub fn into_update(self, images: Vec<String>) -> Result<CarUpdate, FormError> {
        self.validate()?;
        if images.len() > MAX_IMAGES {
            return Err(FormError::too_many());
        }
        Ok(CarUpdate {
            title: self.title,
            desc: self.desc,
            tags: split_tags(&self.tags),
            images,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Preview stand-in counting releases
    #[derive(Debug)]
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn batch(n: usize, released: &Rc<Cell<usize>>) -> Vec<SelectedImage<Tracked>> {
        (0..n)
            .map(|i| SelectedImage {
                data_url: format!("data:image/png;base64,{}", i),
                preview: Tracked(released.clone()),
            })
            .collect()
    }

    fn filled_form(images: usize, released: &Rc<Cell<usize>>) -> AddCarForm<Tracked> {
        let mut form = AddCarForm::default();
        form.title = "Corolla".to_string();
        form.desc = "Reliable".to_string();
        form.tags = "sedan, toyota".to_string();
        form.append(batch(images, released)).unwrap();
        form
    }

    #[test]
    fn test_batches_up_to_limit_are_accepted() {
        let released = Rc::new(Cell::new(0));
        for (existing, n) in [(0, 10), (4, 6), (9, 1), (3, 0)] {
            let mut form = AddCarForm::default();
            form.append(batch(existing, &released)).unwrap();
            assert!(form.can_accept(n).is_ok());
            form.append(batch(n, &released)).unwrap();
            assert_eq!(form.image_count(), existing + n);
        }
    }

    #[test]
    fn test_oversized_batch_leaves_state_unchanged() {
        let released = Rc::new(Cell::new(0));
        let mut form = filled_form(8, &released);
        assert_eq!(form.can_accept(3), Err(FormError::too_many()));
        assert_eq!(form.append(batch(3, &released)), Err(FormError::too_many()));
        assert_eq!(form.image_count(), 8);
        // rejected previews are released, kept ones are not
        assert_eq!(released.get(), 3);
    }

    #[test]
    fn test_remove_image_releases_one_preview_and_keeps_order() {
        let released = Rc::new(Cell::new(0));
        let mut form = filled_form(4, &released);
        let removed = form.remove_image(1).unwrap();
        assert_eq!(removed.data_url, "data:image/png;base64,1");
        drop(removed);
        assert_eq!(released.get(), 1);
        let urls: Vec<&str> = form.images().iter().map(|i| i.data_url.as_str()).collect();
        assert_eq!(urls, vec![
            "data:image/png;base64,0",
            "data:image/png;base64,2",
            "data:image/png;base64,3",
        ]);
        assert!(form.remove_image(10).is_none());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_submit_without_images_is_rejected() {
        let released = Rc::new(Cell::new(0));
        let mut form = filled_form(0, &released);
        assert_eq!(form.begin_submit(), Err(FormError::NoImages));
        assert!(!form.is_uploading());
    }

    #[test]
    fn test_submit_requires_title_and_description() {
        let released = Rc::new(Cell::new(0));
        let mut form = filled_form(1, &released);
        form.title = "  ".to_string();
        assert_eq!(form.begin_submit(), Err(FormError::MissingField("title")));
        form.title = "T".to_string();
        form.desc.clear();
        assert_eq!(form.begin_submit(), Err(FormError::MissingField("description")));
    }

    #[test]
    fn test_successful_submit_sends_all_images_and_releases_previews() {
        let released = Rc::new(Cell::new(0));
        let mut form = filled_form(3, &released);
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.images.len(), 3);
        assert_eq!(payload.tags, "sedan, toyota");
        assert!(form.is_uploading());

        assert_eq!(form.begin_submit(), Err(FormError::Busy));

        form.finish_submit(true);
        assert_eq!(released.get(), 3);
        assert_eq!(form.image_count(), 0);
        assert!(form.title.is_empty());
        assert!(!form.is_uploading());
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let released = Rc::new(Cell::new(0));
        let mut form = filled_form(2, &released);
        form.begin_submit().unwrap();
        form.finish_submit(false);
        assert_eq!(form.image_count(), 2);
        assert_eq!(released.get(), 0);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("luxury, sports,,  sedan "), vec!["luxury", "sports", "sedan"]);
        assert!(split_tags(" , ").is_empty());
    }

    #[test]
    fn test_edit_form_round_trip() {
        let record = CarRecord {
            id: "42".to_string(),
            title: "Golf".to_string(),
            desc: "Hatch".to_string(),
            tags: vec!["vw".to_string(), "hatchback".to_string()],
            images: vec![
                Image::DataUrl("data:image/png;base64,AA==".to_string()),
                Image::DataUrl("data:image/png;base64,AQ==".to_string()),
            ],
        };
        let mut form = EditForm::from_record(&record);
        assert_eq!(form.tags, "vw, hatchback");
        assert_eq!(form.current_image, Some(record.images[0].clone()));

        form.tags = "vw, gti".to_string();
        let update = form.into_update(vec![]).unwrap();
        assert_eq!(update.joined_tags(), "vw,gti");
        assert!(update.images.is_empty());
    }

    #[test]
    fn test_edit_form_rejects_blank_title() {
        let mut form = EditForm {
            id: "1".into(),
            title: String::new(),
            desc: "d".into(),
            tags: String::new(),
            current_image: None,
        };
        assert_eq!(form.clone().into_update(vec![]), Err(FormError::MissingField("title")));
        form.title = "ok".into();
        let too_many = vec![String::new(); MAX_IMAGES + 1];
        assert_eq!(form.into_update(too_many), Err(FormError::too_many()));
    }
}
