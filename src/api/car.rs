//! Car Endpoints
//!
//! Bindings for `/api/car/*`.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::multipart::Form;
use reqwest::Method;

use super::{check, parse_json, ApiClient};
use crate::error::ApiError;
use crate::models::{CarRecord, CarUpdate, NewCar};

pub const LIST_PATH: &str = "/api/car/listcars";
pub const ADD_PATH: &str = "/api/car/addcar";
pub const UPDATE_PATH: &str = "/api/car/updatecar";
pub const DELETE_PATH: &str = "/api/car/deletecar";
pub const SEARCH_PATH: &str = "/api/car/search";

fn with_id(base: &str, id: &str) -> String {
    format!("{}/{}", base, utf8_percent_encode(id, NON_ALPHANUMERIC))
}

pub fn search_path(keyword: &str) -> String {
    format!("{}?keyword={}", SEARCH_PATH, utf8_percent_encode(keyword, NON_ALPHANUMERIC))
}

/// Multipart fields of an update, in send order. Each replacement image is
/// its own `images` part.
pub fn update_fields(update: &CarUpdate) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("title", update.title.clone()),
        ("desc", update.desc.clone()),
        ("tags", update.joined_tags()),
    ];
    fields.extend(update.images.iter().map(|img| ("images", img.clone())));
    fields
}

impl ApiClient {
    pub async fn list_cars(&self) -> Result<Vec<CarRecord>, ApiError> {
        let response = self.authed(Method::GET, LIST_PATH)?.send().await?;
        let body = check(response, "Failed to fetch cars").await?;
        parse_json(&body)
    }

    pub async fn add_car(&self, car: &NewCar) -> Result<(), ApiError> {
        let response = self.authed(Method::POST, ADD_PATH)?.json(car).send().await?;
        let body = check(response, "Failed to add car").await?;
        log::debug!("[API] Backend response: {}", body);
        Ok(())
    }

    pub async fn update_car(&self, id: &str, update: &CarUpdate) -> Result<(), ApiError> {
        let form = update_fields(update)
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        let response = self
            .authed(Method::PUT, &with_id(UPDATE_PATH, id))?
            .multipart(form)
            .send()
            .await?;
        check(response, "Failed to update car").await?;
        Ok(())
    }

    pub async fn delete_car(&self, id: &str) -> Result<(), ApiError> {
        let response = self.authed(Method::DELETE, &with_id(DELETE_PATH, id))?.send().await?;
        check(response, "Failed to delete car").await?;
        Ok(())
    }

    /// Blank keywords short-circuit to no results without a request
    pub async fn search_cars(&self, keyword: &str) -> Result<Vec<CarRecord>, ApiError> {
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }
        let response = self.authed(Method::GET, &search_path(keyword))?.send().await?;
        let body = check(response, "No products found with the given keyword").await?;
        parse_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::session::{MemoryTokenStore, Session};

    fn unreachable_client(store: MemoryTokenStore) -> ApiClient {
        ApiClient::new(AppConfig::new("http://127.0.0.1:9"), Session::new(store))
    }

    #[test]
    fn test_paths() {
        assert_eq!(with_id(UPDATE_PATH, "65a1f0"), "/api/car/updatecar/65a1f0");
        assert_eq!(with_id(DELETE_PATH, "a/b"), "/api/car/deletecar/a%2Fb");
        assert_eq!(search_path("sedan"), "/api/car/search?keyword=sedan");
        assert_eq!(search_path("4x4 & suv"), "/api/car/search?keyword=4x4%20%26%20suv");
    }

    #[test]
    fn test_update_fields() {
        let update = CarUpdate {
            title: "Civic".into(),
            desc: "Clean".into(),
            tags: vec!["sedan".into(), "honda".into()],
            images: vec!["data:a".into(), "data:b".into()],
        };
        let fields = update_fields(&update);
        assert_eq!(fields, vec![
            ("title", "Civic".to_string()),
            ("desc", "Clean".to_string()),
            ("tags", "sedan,honda".to_string()),
            ("images", "data:a".to_string()),
            ("images", "data:b".to_string()),
        ]);
    }

    #[test]
    fn test_update_without_new_images_sends_no_image_parts() {
        let update = CarUpdate { title: "t".into(), desc: "d".into(), tags: vec![], images: vec![] };
        let fields = update_fields(&update);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[2], ("tags", String::new()));
    }

    #[test]
    fn test_search_results_decode_verbatim() {
        let body = r#"[
            {"_id":"1","title":"Accord","desc":"Midsize","tags":["sedan","honda"],"images":[]},
            {"_id":"2","title":"Camry","desc":"Comfort","tags":["sedan"],"images":["data:image/png;base64,AA=="]}
        ]"#;
        let cars: Vec<CarRecord> = parse_json(body).unwrap();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].title, "Accord");
        assert_eq!(cars[0].tags, vec!["sedan", "honda"]);
        assert_eq!(cars[1].desc, "Comfort");
    }

    #[test]
    fn test_non_json_list_is_decode_error() {
        assert!(matches!(parse_json::<Vec<CarRecord>>("ok"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_blank_keyword_sends_no_request() {
        let client = unreachable_client(MemoryTokenStore::with_token("tok"));
        for keyword in ["", "   ", "\t\n"] {
            let cars = futures::executor::block_on(client.search_cars(keyword)).unwrap();
            assert!(cars.is_empty());
        }
    }

    #[test]
    fn test_blank_keyword_returns_before_auth_check() {
        let client = unreachable_client(MemoryTokenStore::default());
        let result = futures::executor::block_on(client.search_cars("  "));
        assert!(matches!(result, Ok(cars) if cars.is_empty()));

        let result = futures::executor::block_on(client.search_cars("sedan"));
        assert!(matches!(result, Err(ApiError::NotAuthenticated)));
    }
}
