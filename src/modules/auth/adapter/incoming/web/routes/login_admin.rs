use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub username: String,
    pub email: String,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Admin connected successfully.", body = LoginResponseDto),
        (status = 400, description = "Missing fields or incorrect credentials"),
        (status = 500, description = "Server error")
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequestDto>,
) -> impl Responder {
    let payload = payload.into_inner();

    let request = match LoginRequest::new(payload.email, payload.password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(result) => ApiResponse::success(LoginResponseDto {
            message: "Admin connected successfully.".to_string(),
            username: result.username,
            email: result.email,
            token: result.token,
        }),

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::authentication_error(&LoginError::InvalidCredentials.to_string())
        }

        Err(e) => {
            error!(error = %e, "Login failed unexpectedly");
            ApiResponse::server_error("Server Error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubLoginAdminUseCase;

    async fn post_login(state: TestAppStateBuilder, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state.build())
                .app_data(custom_json_config())
                .service(login_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_login_success() {
        let state = TestAppStateBuilder::default().with_login(StubLoginAdminUseCase::success(
            "admin",
            "admin@example.com",
            "jwt-token",
        ));

        let (status, body) = post_login(
            state,
            json!({"email": "admin@example.com", "password": "secret1"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Admin connected successfully.");
        assert_eq!(body["username"], "admin");
        assert_eq!(body["email"], "admin@example.com");
        assert_eq!(body["token"], "jwt-token");
    }

    #[actix_web::test]
    async fn test_login_missing_fields() {
        for body in [
            json!({"email": "admin@example.com"}),
            json!({"password": "secret1"}),
            json!({"email": null, "password": "secret1"}),
            json!({"email": "  ", "password": "secret1"}),
        ] {
            let (status, body) = post_login(TestAppStateBuilder::default(), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"message": "All fields are required"}));
        }
    }

    #[actix_web::test]
    async fn test_login_wrong_password() {
        let state = TestAppStateBuilder::default()
            .with_login(StubLoginAdminUseCase::error(LoginError::InvalidCredentials));

        let (status, body) = post_login(
            state,
            json!({"email": "admin@example.com", "password": "wrong"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Incorrect Email or Password."}));
    }

    #[actix_web::test]
    async fn test_login_internal_failure_hides_detail() {
        let state = TestAppStateBuilder::default().with_login(StubLoginAdminUseCase::error(
            LoginError::QueryError("connection refused".to_string()),
        ));

        let (status, body) = post_login(
            state,
            json!({"email": "admin@example.com", "password": "secret1"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Server Error"}));
    }

    #[actix_web::test]
    async fn test_login_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(custom_json_config())
                .service(login_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"email\": ")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Invalid request body."}));
    }
}
