use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A store operation as it would go over the wire. The UI never opens a
/// connection itself; these value objects define the request/response
/// contract the external store implements.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

pub fn get_content_request(path: &str) -> ApiRequest {
    ApiRequest {
        method: Method::Get,
        path: path.to_string(),
        body: None,
    }
}

pub fn get_schema_request(type_name: &str) -> ApiRequest {
    ApiRequest {
        method: Method::Get,
        path: format!("/@types/{type_name}"),
        body: None,
    }
}

pub fn update_content_request(path: &str, payload: Value) -> ApiRequest {
    ApiRequest {
        method: Method::Patch,
        path: path.to_string(),
        body: Some(payload),
    }
}

/// `GET {url}/@history`
pub fn get_history_request(url: &str) -> ApiRequest {
    ApiRequest {
        method: Method::Get,
        path: format!("{url}/@history"),
        body: None,
    }
}

/// `PATCH {url}/@history` with the version to restore.
pub fn revert_history_request(url: &str, version: u64) -> ApiRequest {
    ApiRequest {
        method: Method::Patch,
        path: format!("{url}/@history"),
        body: Some(json!({ "version": version })),
    }
}
