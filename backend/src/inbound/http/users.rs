//! Users API handlers.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users        {"name":"John Doe","email":"john@example.com"}
//! PUT    /api/users/{id}   {"email":"new@example.com"}
//! DELETE /api/users/{id}
//! ```
//!
//! Each handler decodes the request, makes exactly one repository call and
//! encodes the result. The `{id}` segment is passed through untouched.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{DeletedUser, NewUser, UpdatedUser, User, UserChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{
    DeletedUserSchema, UpdatedUserSchema, UserInputSchema, UserSchema,
};
use crate::inbound::http::state::HttpState;

/// Register the user routes under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_users)
            .service(create_user)
            .service(update_user)
            .service(delete_user),
    );
}

/// Returns the list of all the users.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "The list of the users", body = [UserSchema]),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["Users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserInputSchema,
    responses(
        (status = 201, description = "The user was successfully created", body = UserSchema),
        (status = 400, description = "Body is not valid JSON", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["Users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUser>,
) -> ApiResult<HttpResponse> {
    let created = state.users.create(&payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Update a user by id.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "The user id")),
    request_body = UserInputSchema,
    responses(
        (status = 200, description = "The user was updated", body = UpdatedUserSchema),
        (status = 400, description = "Body is not valid JSON", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["Users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<UserChanges>,
) -> ApiResult<web::Json<UpdatedUser>> {
    let updated = state.users.update(&id, &payload.into_inner()).await?;
    Ok(web::Json(updated))
}

/// Remove a user by id.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "The user id")),
    responses(
        (status = 200, description = "The user was deleted", body = DeletedUserSchema),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["Users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<DeletedUser>> {
    let deleted = state.users.delete(&id).await?;
    Ok(web::Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::ports::{MockUserRepository, StoreError};
    use crate::domain::{CreatedUser, UserId};
    use crate::inbound::http::error::json_config;

    async fn call(
        repo: MockUserRepository,
        request: actix_test::TestRequest,
    ) -> (StatusCode, Value) {
        let state = web::Data::new(HttpState::new(Arc::new(repo)));
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .app_data(json_config())
                .configure(configure),
        )
        .await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value = serde_json::from_slice(&body).expect("JSON response body");
        (status, value)
    }

    #[actix_web::test]
    async fn list_returns_repository_rows() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![User::new(
                UserId::new(1),
                Some("John Doe".into()),
                Some("john@example.com".into()),
            )])
        });

        let (status, body) = call(repo, actix_test::TestRequest::get().uri("/api/users")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 1, "name": "John Doe", "email": "john@example.com" }])
        );
    }

    #[actix_web::test]
    async fn create_returns_201_with_assigned_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(1).returning(|user| {
            Ok(CreatedUser {
                id: UserId::new(5),
                fields: user.clone(),
            })
        });

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "John Doe", "email": "john@example.com" }));
        let (status, body) = call(repo, request).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "id": 5, "name": "John Doe", "email": "john@example.com" })
        );
    }

    #[actix_web::test]
    async fn update_passes_raw_path_id_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(
                eq("abc"),
                eq(UserChanges {
                    name: None,
                    email: Some(Some("new@example.com".into())),
                }),
            )
            .times(1)
            .returning(|id, changes| {
                Ok(UpdatedUser {
                    id: id.to_owned(),
                    changes: changes.clone(),
                })
            });

        let request = actix_test::TestRequest::put()
            .uri("/api/users/abc")
            .set_json(json!({ "email": "new@example.com" }));
        let (status, body) = call(repo, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": "abc", "email": "new@example.com" }));
    }

    #[actix_web::test]
    async fn update_forwards_nulls_and_scalar_text() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(
                eq("1"),
                eq(UserChanges {
                    name: Some(None),
                    email: Some(Some("5".into())),
                }),
            )
            .times(1)
            .returning(|id, changes| {
                Ok(UpdatedUser {
                    id: id.to_owned(),
                    changes: changes.clone(),
                })
            });

        let request = actix_test::TestRequest::put()
            .uri("/api/users/1")
            .set_json(json!({ "name": null, "email": 5 }));
        let (status, body) = call(repo, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": "1", "name": null, "email": "5" }));
    }

    #[actix_web::test]
    async fn delete_confirms_with_string_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq("7"))
            .times(1)
            .returning(|id| Ok(DeletedUser::new(id)));

        let (status, body) =
            call(repo, actix_test::TestRequest::delete().uri("/api/users/7")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User deleted", "id": "7" }));
    }

    #[rstest]
    #[case::list(actix_test::TestRequest::get().uri("/api/users"))]
    #[case::create(actix_test::TestRequest::post().uri("/api/users").set_json(json!({ "name": "x" })))]
    #[case::update(actix_test::TestRequest::put().uri("/api/users/1").set_json(json!({ "name": "x" })))]
    #[case::delete(actix_test::TestRequest::delete().uri("/api/users/1"))]
    #[actix_web::test]
    async fn store_failures_become_500(#[case] request: actix_test::TestRequest) {
        let mut repo = MockUserRepository::new();
        let failure = || StoreError::connection("connection refused");
        repo.expect_list().returning(move || Err(failure()));
        repo.expect_create().returning(move |_| Err(failure()));
        repo.expect_update().returning(move |_, _| Err(failure()));
        repo.expect_delete().returning(move |_| Err(failure()));

        let (status, body) = call(repo, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": { "kind": "connection", "message": "connection refused" } })
        );
    }

    #[actix_web::test]
    async fn malformed_json_is_rejected_before_the_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json");
        let (status, body) = call(repo, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["kind"], "invalid_body");
    }

    #[actix_web::test]
    async fn body_without_content_type_is_accepted() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(NewUser {
                name: Some(Some("Ada".into())),
                email: None,
            }))
            .times(1)
            .returning(|user| {
                Ok(CreatedUser {
                    id: UserId::new(1),
                    fields: user.clone(),
                })
            });

        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_payload(r#"{"name":"Ada","role":"ignored"}"#);
        let (status, body) = call(repo, request).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": 1, "name": "Ada" }));
    }
}
