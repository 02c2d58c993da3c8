//! 路径参数提取器
//!
//! 在进入处理函数之前校验路径中的 ID，非法值直接返回 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,63}$").expect("Invalid id regex"));

/// 经过校验的课程 ID（路径参数 `{id}`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeCourseId(pub String);

impl SafeCourseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn bad_request(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

impl FromRequest for SafeCourseId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(id) if ID_RE.is_match(id) => Ok(SafeCourseId(id.to_string())),
            Some(id) => Err(bad_request(format!("Invalid course id: {id}"))),
            None => Err(bad_request("Missing course id".to_string())),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_course_id() {
        let req = TestRequest::default()
            .param("id", "cs61a")
            .to_http_request();
        let id = SafeCourseId::extract(&req).await.unwrap();
        assert_eq!(id.as_str(), "cs61a");
    }

    #[actix_web::test]
    async fn test_invalid_course_id() {
        let req = TestRequest::default()
            .param("id", "../etc")
            .to_http_request();
        assert!(SafeCourseId::extract(&req).await.is_err());
    }
}
