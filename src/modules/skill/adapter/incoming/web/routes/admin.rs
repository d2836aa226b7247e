use actix_multipart::Multipart;
use actix_web::{delete, post, put, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use super::skill_form::{draft_from_form, patch_from_form, SkillFormSchema};
use super::{NOT_FOUND_MESSAGE, SKILL_ICON_FIELD};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::skill::application::ports::incoming::use_cases::SkillWriteError;
use crate::shared::api::{parse_id, ApiResponse, MultipartForm};
use crate::AppState;

fn write_error_response(e: SkillWriteError) -> HttpResponse {
    match e {
        SkillWriteError::NotFound => ApiResponse::not_found(NOT_FOUND_MESSAGE),
        SkillWriteError::Validation(_) | SkillWriteError::NameAlreadyExists => {
            ApiResponse::validation_error(&e.to_string())
        }
        SkillWriteError::StorageError(_) | SkillWriteError::RepositoryError(_) => {
            error!(error = %e, "Skill write failed");
            ApiResponse::server_error("Server Error")
        }
    }
}

async fn read_form(payload: Multipart, data: &AppState) -> Result<MultipartForm, HttpResponse> {
    MultipartForm::read(payload, SKILL_ICON_FIELD, &data.upload_policy)
        .await
        .map_err(|e| {
            warn!(error = %e, "Rejected skill form");
            ApiResponse::validation_error(&e.to_string())
        })
}

#[utoipa::path(
    post,
    path = "/api/admin/skills/createSkill",
    tag = "Skills",
    security(("bearer_auth" = [])),
    request_body(content = SkillFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Skill created successfully."),
        (status = 400, description = "Validation failed or duplicate name"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Server error")
    )
)]
#[post("/skills/createSkill")]
pub async fn create_skill_handler(
    admin: AuthenticatedAdmin,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form = match read_form(payload, &data).await {
        Ok(form) => form,
        Err(resp) => return resp,
    };
    let icon = form.take_file();

    match data.skill.create.execute(draft_from_form(&mut form), icon).await {
        Ok(skill) => {
            info!(skill_id = %skill.id, admin_id = %admin.admin_id, "Skill created by admin");
            ApiResponse::created("Skill created successfully.", "Skill", skill)
        }
        Err(e) => write_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/skills/{id}",
    tag = "Skills",
    params(("id" = String, Path, description = "Skill id")),
    security(("bearer_auth" = [])),
    request_body(content = SkillFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Skill updated successfully."),
        (status = 400, description = "Validation failed or duplicate name"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Skill not found"),
        (status = 500, description = "Server error")
    )
)]
#[put("/skills/{id}")]
pub async fn update_skill_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(skill_id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    let mut form = match read_form(payload, &data).await {
        Ok(form) => form,
        Err(resp) => return resp,
    };
    let icon = form.take_file();

    match data
        .skill
        .update
        .execute(skill_id, patch_from_form(&mut form), icon)
        .await
    {
        Ok(skill) => {
            info!(%skill_id, admin_id = %admin.admin_id, "Skill updated by admin");
            ApiResponse::updated("Skill updated successfully.", "Skill", skill)
        }
        Err(e) => write_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/skills/{id}",
    tag = "Skills",
    params(("id" = String, Path, description = "Skill id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Skill deleted successfully."),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Skill not found"),
        (status = 500, description = "Server error")
    )
)]
#[delete("/skills/{id}")]
pub async fn delete_skill_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(skill_id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    match data.skill.delete.execute(skill_id).await {
        Ok(()) => {
            info!(%skill_id, admin_id = %admin.admin_id, "Skill removed by admin");
            ApiResponse::deleted("Skill deleted successfully.", skill_id)
        }
        Err(e) => write_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, middleware::from_fn, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::auth::adapter::incoming::web::middleware::protect;
    use crate::modules::skill::application::domain::entities::{SkillPatch, SkillValidationError};
    use crate::modules::skill::application::skill_use_cases::SkillUseCases;
    use crate::tests::support::app_state_builder::{default_skill_use_cases, TestAppStateBuilder};
    use crate::tests::support::auth_helper::{bearer_header, token_provider};
    use crate::tests::support::mocks::{
        MockCreateSkillUseCase, MockDeleteSkillUseCase, MockUpdateSkillUseCase,
    };
    use crate::tests::support::multipart::MultipartBody;
    use crate::tests::support::skill_test_fixtures::sample_skill;

    async fn send(
        skills: SkillUseCases,
        req: test::TestRequest,
        body: Option<MultipartBody>,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_skill(skills).build())
                .app_data(web::Data::new(token_provider()))
                .service(
                    web::scope("/api/admin")
                        .wrap(from_fn(protect))
                        .service(create_skill_handler)
                        .service(update_skill_handler)
                        .service(delete_skill_handler),
                ),
        )
        .await;

        let req = req.insert_header(bearer_header());
        let req = match body {
            Some(body) => body.attach(req).to_request(),
            None => req.to_request(),
        };

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn skill_form() -> MultipartBody {
        MultipartBody::new()
            .text("name", "Rust")
            .text("category", "Backend")
            .text("level", "Advanced")
            .file(SKILL_ICON_FIELD, "rust.svg", "image/svg+xml", b"<svg/>")
    }

    #[actix_web::test]
    async fn test_create_skill() {
        let mut create = MockCreateSkillUseCase::new();
        create
            .expect_execute()
            .withf(|draft, icon| {
                draft.name.as_deref() == Some("Rust")
                    && draft.level.as_deref() == Some("Advanced")
                    && icon.is_some()
            })
            .times(1)
            .returning(|_, _| Ok(sample_skill()));

        let (status, body) = send(
            SkillUseCases {
                create: Arc::new(create),
                ..default_skill_use_cases()
            },
            test::TestRequest::post().uri("/api/admin/skills/createSkill"),
            Some(skill_form()),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Skill created successfully.");
        assert_eq!(body["Skill"]["name"], "Rust");
    }

    #[actix_web::test]
    async fn test_duplicate_skill_name() {
        let mut create = MockCreateSkillUseCase::new();
        create
            .expect_execute()
            .returning(|_, _| Err(SkillWriteError::NameAlreadyExists));

        let (status, body) = send(
            SkillUseCases {
                create: Arc::new(create),
                ..default_skill_use_cases()
            },
            test::TestRequest::post().uri("/api/admin/skills/createSkill"),
            Some(skill_form()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "A skill with this name already exists."}));
    }

    #[actix_web::test]
    async fn test_create_without_icon() {
        let mut create = MockCreateSkillUseCase::new();
        create
            .expect_execute()
            .withf(|_, icon| icon.is_none())
            .returning(|_, _| Err(SkillValidationError::MissingIcon.into()));

        let (status, body) = send(
            SkillUseCases {
                create: Arc::new(create),
                ..default_skill_use_cases()
            },
            test::TestRequest::post().uri("/api/admin/skills/createSkill"),
            Some(MultipartBody::new().text("name", "Rust").text("category", "Backend")),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Skill icon is required."}));
    }

    #[actix_web::test]
    async fn test_update_skill() {
        let id = Uuid::new_v4();
        let mut update = MockUpdateSkillUseCase::new();
        update
            .expect_execute()
            .withf(move |requested, patch, icon| {
                *requested == id && patch.name.as_deref() == Some("Rust 2024") && icon.is_none()
            })
            .returning(|_, _, _| Ok(sample_skill()));

        let (status, body) = send(
            SkillUseCases {
                update: Arc::new(update),
                ..default_skill_use_cases()
            },
            test::TestRequest::put().uri(&format!("/api/admin/skills/{id}")),
            Some(MultipartBody::new().text("name", "Rust 2024")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Skill updated successfully.");
    }

    #[actix_web::test]
    async fn test_empty_update_form_reaches_lookup() {
        let mut update = MockUpdateSkillUseCase::new();
        update
            .expect_execute()
            .withf(|_, patch, icon| *patch == SkillPatch::default() && icon.is_none())
            .times(1)
            .returning(|_, _, _| Err(SkillWriteError::NotFound));

        let (status, body) = send(
            SkillUseCases {
                update: Arc::new(update),
                ..default_skill_use_cases()
            },
            test::TestRequest::put().uri(&format!("/api/admin/skills/{}", Uuid::new_v4())),
            Some(MultipartBody::new()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Skill not found"}));
    }

    #[actix_web::test]
    async fn test_delete_unknown_skill() {
        let mut delete = MockDeleteSkillUseCase::new();
        delete
            .expect_execute()
            .returning(|_| Err(SkillWriteError::NotFound));

        let (status, body) = send(
            SkillUseCases {
                delete: Arc::new(delete),
                ..default_skill_use_cases()
            },
            test::TestRequest::delete().uri(&format!("/api/admin/skills/{}", Uuid::new_v4())),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Skill not found"}));
    }

    #[actix_web::test]
    async fn test_delete_skill() {
        let id = Uuid::new_v4();
        let mut delete = MockDeleteSkillUseCase::new();
        delete.expect_execute().returning(|_| Ok(()));

        let (status, body) = send(
            SkillUseCases {
                delete: Arc::new(delete),
                ..default_skill_use_cases()
            },
            test::TestRequest::delete().uri(&format!("/api/admin/skills/{id}")),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Skill deleted successfully.", "id": id.to_string()})
        );
    }
}
