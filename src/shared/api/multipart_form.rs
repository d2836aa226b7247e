use std::collections::HashMap;

use actix_multipart::{Field, Multipart, MultipartError};
use futures::StreamExt;
use tracing::warn;

use super::INVALID_BODY_MESSAGE;
use crate::shared::storage::{UploadPolicy, UploadRejected, UploadedFile};

const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Parser detail is kept for logs; clients only see the fixed message.
    #[error("{}", INVALID_BODY_MESSAGE)]
    Malformed(String),

    #[error("Field {0} is too large")]
    FieldTooLarge(String),

    #[error(transparent)]
    Upload(#[from] UploadRejected),
}

/// A fully buffered multipart form: text parts by name plus at most one file.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Drains the payload. Only the part named `file_field` is treated as a
    /// file; it is checked against `policy` while being read.
    pub async fn read(
        mut payload: Multipart,
        file_field: &str,
        policy: &UploadPolicy,
    ) -> Result<Self, FormError> {
        let mut form = MultipartForm::default();
        let mut parts = 0usize;

        while let Some(item) = payload.next().await {
            let mut field = match item {
                Ok(field) => field,
                // A form submitted with no parts at all carries only the closing boundary.
                Err(MultipartError::Incomplete) if parts == 0 => break,
                Err(e) => return Err(malformed(e)),
            };
            parts += 1;

            let name = field
                .name()
                .map(str::to_string)
                .ok_or_else(|| malformed("part without a name"))?;

            if name == file_field {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .map(str::to_string)
                    .filter(|f| !f.is_empty());
                let content_type = field.content_type().map(|m| m.essence_str().to_string());

                let limit = policy.max_file_size_bytes as usize;
                let bytes = match read_part(&mut field, limit).await {
                    Ok(bytes) => bytes,
                    Err(FormError::FieldTooLarge(_)) => {
                        return Err(UploadRejected::TooLarge {
                            max_bytes: policy.max_file_size_bytes,
                        }
                        .into())
                    }
                    Err(e) => return Err(e),
                };

                // Browsers send an empty part when no file was picked.
                if bytes.is_empty() && file_name.is_none() {
                    continue;
                }

                let content_type = content_type.unwrap_or_default();
                policy.check(&content_type, bytes.len() as u64)?;

                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            } else {
                let bytes = read_part(&mut field, MAX_TEXT_FIELD_BYTES).await?;
                let value = String::from_utf8(bytes)
                    .map_err(|_| malformed(format!("field {name} is not UTF-8")))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Removes and returns a text field.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn take_file(&mut self) -> Option<UploadedFile> {
        self.file.take()
    }

    #[cfg(test)]
    pub fn from_parts(fields: &[(&str, &str)], file: Option<UploadedFile>) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            file,
        }
    }
}

fn malformed(detail: impl std::fmt::Display) -> FormError {
    let detail = detail.to_string();
    warn!(%detail, "Malformed multipart body");
    FormError::Malformed(detail)
}

async fn read_part(field: &mut Field, limit: usize) -> Result<Vec<u8>, FormError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(malformed)?;
        if buf.len() + chunk.len() > limit {
            let name = field.name().unwrap_or_default().to_string();
            return Err(FormError::FieldTooLarge(name));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::multipart::MultipartBody;
    use actix_web::{http::StatusCode, post, test, web, App, HttpResponse, Responder};

    #[post("/form")]
    async fn echo_form(payload: Multipart, policy: web::Data<UploadPolicy>) -> impl Responder {
        match MultipartForm::read(payload, "projectImage", &policy).await {
            Ok(mut form) => {
                let file = form.take_file();
                HttpResponse::Ok().json(serde_json::json!({
                    "name": form.take("name"),
                    "fileName": file.as_ref().and_then(|f| f.file_name.clone()),
                    "fileSize": file.map(|f| f.bytes.len()),
                }))
            }
            Err(e) => HttpResponse::BadRequest().body(e.to_string()),
        }
    }

    async fn call(body: MultipartBody, max_bytes: u64) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UploadPolicy::new(max_bytes)))
                .service(echo_form),
        )
        .await;
        let req = body.attach(test::TestRequest::post().uri("/form")).to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_reads_text_fields_and_file() {
        let body = MultipartBody::new()
            .text("name", "Portfolio website")
            .file("projectImage", "shot.png", "image/png", b"\x89PNG....");

        let resp = call(body, 1024).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["name"], "Portfolio website");
        assert_eq!(json["fileName"], "shot.png");
        assert_eq!(json["fileSize"], 8);
    }

    #[actix_web::test]
    async fn test_rejects_unsupported_file_type() {
        let body = MultipartBody::new().file("projectImage", "notes.pdf", "application/pdf", b"%PDF");

        let resp = call(body, 1024).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_rejects_oversized_file() {
        let body = MultipartBody::new().file("projectImage", "big.png", "image/png", &[0u8; 64]);

        let resp = call(body, 16).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let text = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&text).contains("16 bytes"));
    }

    #[actix_web::test]
    async fn test_form_without_parts_reads_as_empty() {
        let resp = call(MultipartBody::new(), 1024).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["name"], serde_json::Value::Null);
        assert_eq!(json["fileName"], serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn test_truncated_body_hides_parser_detail() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UploadPolicy::default()))
                .service(echo_form),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/form")
            .insert_header((
                "Content-Type",
                "multipart/form-data; boundary=----portfolio-test-boundary",
            ))
            .set_payload(
                "------portfolio-test-boundary\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nPortf",
            )
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let text = test::read_body(resp).await;
        assert_eq!(&text[..], INVALID_BODY_MESSAGE.as_bytes());
    }
}
