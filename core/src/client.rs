//! Stateless HTTP request builder and response parser for the todo-list API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Any 2xx counts as success; the bodies of the
//! update and delete responses are plain text and are ignored.
//!
//! Item ids are opaque, so they are percent-encoded whenever they become a
//! path segment.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemFields, ItemId};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, format!("{}/todo-items", self.base_url))
    }

    pub fn build_get_item(&self, id: &ItemId) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.item_path("item", id))
    }

    pub fn build_add_item(&self, input: &ItemFields) -> Result<HttpRequest, ApiError> {
        let body = encode(input)?;
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/add", self.base_url),
            body,
        ))
    }

    pub fn build_update_item(
        &self,
        id: &ItemId,
        input: &ItemFields,
    ) -> Result<HttpRequest, ApiError> {
        let body = encode(input)?;
        Ok(HttpRequest::json(
            HttpMethod::Put,
            self.item_path("update", id),
            body,
        ))
    }

    pub fn build_delete_item(&self, id: &ItemId) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Delete, self.item_path("delete", id))
    }

    fn item_path(&self, route: &str, id: &ItemId) -> String {
        format!("{}/{route}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_add_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn encode(input: &ItemFields) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://127.0.0.1:8081")
    }

    #[test]
    fn build_list_items_is_plain_get() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://127.0.0.1:8081/todo-items");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_add_item_sends_json() {
        let req = client()
            .build_add_item(&ItemFields::new("Eggs", 12))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://127.0.0.1:8081/add");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Eggs", "quantity": 12}));
    }

    #[test]
    fn build_update_item_targets_id() {
        let id = ItemId::from("abc-1");
        let req = client()
            .build_update_item(&id, &ItemFields::new("Bread", 1))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://127.0.0.1:8081/update/abc-1");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_item_has_no_body() {
        let req = client().build_delete_item(&ItemId::from("abc-1"));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://127.0.0.1:8081/delete/abc-1");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_item_targets_item_route() {
        let req = client().build_get_item(&ItemId::from("abc-1"));
        assert_eq!(req.path, "http://127.0.0.1:8081/item/abc-1");
    }

    #[test]
    fn reserved_characters_in_ids_are_percent_encoded() {
        let c = client();
        let id = ItemId::from("a?b#c/d e");
        let expected = "a%3Fb%23c%2Fd%20e";
        assert_eq!(
            c.build_get_item(&id).path,
            format!("http://127.0.0.1:8081/item/{expected}")
        );
        assert_eq!(
            c.build_delete_item(&id).path,
            format!("http://127.0.0.1:8081/delete/{expected}")
        );
        let update = c.build_update_item(&id, &ItemFields::new("Tea", 1)).unwrap();
        assert_eq!(update.path, format!("http://127.0.0.1:8081/update/{expected}"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TodoClient::new("http://127.0.0.1:8081/").build_list_items();
        assert_eq!(req.path, "http://127.0.0.1:8081/todo-items");
    }

    #[test]
    fn parse_list_items_success() {
        let response = HttpResponse::new(200, r#"[{"id":"1","title":"Milk","quantity":2}]"#);
        let items = client().parse_list_items(response).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Milk");
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client()
            .parse_list_items(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_items_server_error() {
        let err = client()
            .parse_list_items(HttpResponse::new(500, "Failed to fetch items"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 500,
                body: "Failed to fetch items".to_string()
            }
        );
    }

    #[test]
    fn parse_add_item_accepts_created() {
        let response = HttpResponse::new(201, r#"{"id":"9","title":"Eggs","quantity":12}"#);
        let item = client().parse_add_item(response).unwrap();
        assert_eq!(item.id, ItemId::from("9"));
    }

    #[test]
    fn parse_update_item_ignores_text_body() {
        let response = HttpResponse::new(200, "Item updated successfully");
        assert!(client().parse_update_item(response).is_ok());
    }

    #[test]
    fn parse_delete_item_not_found() {
        let err = client()
            .parse_delete_item(HttpResponse::new(404, "Item not found"))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
