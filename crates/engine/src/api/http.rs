//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use placely_domain::{GeoPoint, Place, PlaceId, User, UserId};

use crate::app::App;
use crate::use_cases::places::{PlaceDraft, PlaceError};
use crate::use_cases::users::{SignupDraft, UserError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/places", post(create_place))
        .route(
            "/api/places/{pid}",
            get(get_place).patch(update_place).delete(delete_place),
        )
        .route("/api/places/user/{uid}", get(get_places_for_user))
        .route("/api/users", get(list_users))
        .route("/api/users/signup", post(signup))
        .route("/api/users/login", post(login))
        .fallback(route_not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Could not find this route".to_string())
}

// =============================================================================
// Places
// =============================================================================

async fn get_place(
    State(app): State<Arc<App>>,
    Path(pid): Path<Uuid>,
) -> Result<Json<PlaceEnvelope>, ApiError> {
    let place = app
        .use_cases
        .places
        .get
        .execute(PlaceId::from_uuid(pid))
        .await?;
    Ok(Json(PlaceEnvelope {
        place: place.into(),
    }))
}

async fn get_places_for_user(
    State(app): State<Arc<App>>,
    Path(uid): Path<Uuid>,
) -> Result<Json<PlacesEnvelope>, ApiError> {
    let places = app
        .use_cases
        .places
        .list_for_owner
        .execute(UserId::from_uuid(uid))
        .await?;
    Ok(Json(PlacesEnvelope {
        places: places.into_iter().map(Into::into).collect(),
    }))
}

async fn create_place(
    State(app): State<Arc<App>>,
    Json(body): Json<CreatePlaceRequest>,
) -> Result<(StatusCode, Json<PlaceEnvelope>), ApiError> {
    validate(&body)?;

    let place = app
        .use_cases
        .places
        .create
        .execute(PlaceDraft {
            title: body.title,
            description: body.description,
            address: body.address,
            image_url: body.image,
            creator: UserId::from_uuid(body.creator),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PlaceEnvelope {
            place: place.into(),
        }),
    ))
}

async fn update_place(
    State(app): State<Arc<App>>,
    Path(pid): Path<Uuid>,
    Json(body): Json<UpdatePlaceRequest>,
) -> Result<Json<PlaceEnvelope>, ApiError> {
    validate(&body)?;

    let place = app
        .use_cases
        .places
        .update
        .execute(PlaceId::from_uuid(pid), body.title, body.description)
        .await?;
    Ok(Json(PlaceEnvelope {
        place: place.into(),
    }))
}

async fn delete_place(
    State(app): State<Arc<App>>,
    Path(pid): Path<Uuid>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    app.use_cases
        .places
        .delete
        .execute(PlaceId::from_uuid(pid))
        .await?;
    Ok(Json(MessageEnvelope {
        message: "Deleted place".to_string(),
    }))
}

// =============================================================================
// Users
// =============================================================================

async fn list_users(State(app): State<Arc<App>>) -> Result<Json<UsersEnvelope>, ApiError> {
    let users = app.use_cases.users.list.execute().await?;
    Ok(Json(UsersEnvelope {
        users: users.iter().map(Into::into).collect(),
    }))
}

async fn signup(
    State(app): State<Arc<App>>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserEnvelope>), ApiError> {
    validate(&body)?;

    let user = app
        .use_cases
        .users
        .signup
        .execute(SignupDraft {
            name: body.name,
            email: body.email,
            password: body.password,
            image_url: body.image,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            user: (&user).into(),
        }),
    ))
}

async fn login(
    State(app): State<Arc<App>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginEnvelope>, ApiError> {
    let user = app
        .use_cases
        .users
        .login
        .execute(&body.email, &body.password)
        .await?;
    Ok(Json(LoginEnvelope {
        message: "Logged in".to_string(),
        user: (&user).into(),
    }))
}

// =============================================================================
// Request bodies
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
struct CreatePlaceRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    title: String,
    #[validate(length(min = 5, message = "Description must be at least 5 characters long"))]
    description: String,
    #[validate(length(min = 1, message = "Address must not be empty"))]
    address: String,
    creator: Uuid,
    image: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
struct UpdatePlaceRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    title: String,
    #[validate(length(min = 5, message = "Description must be at least 5 characters long"))]
    description: String,
}

#[derive(Debug, Deserialize, Validate)]
struct SignupRequest {
    #[validate(length(min = 3, message = "Name must be at least 3 characters long"))]
    name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    email: String,
    #[validate(length(
        min = 8,
        max = 14,
        message = "Password must be between 8 and 14 characters long"
    ))]
    password: String,
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Reject a structurally invalid body before any port is touched.
fn validate<T: Validate>(body: &T) -> Result<(), ApiError> {
    body.validate()
        .map_err(|errors| ApiError::Validation(first_validation_message(&errors)))
}

fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid inputs passed, please check your data".to_string())
}

// =============================================================================
// Response bodies
// =============================================================================

#[derive(Debug, Serialize)]
struct PlaceResponse {
    id: PlaceId,
    title: String,
    description: String,
    address: String,
    location: GeoPoint,
    image: Option<String>,
    creator: UserId,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            title: place.title.to_string(),
            description: place.description,
            address: place.address,
            location: place.location,
            image: place.image_url,
            creator: place.creator,
        }
    }
}

/// A user as exposed to clients: the password hash never leaves the server.
#[derive(Debug, Serialize)]
struct UserResponse {
    id: UserId,
    name: String,
    email: String,
    image: Option<String>,
    places: Vec<PlaceId>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            image: user.image_url().map(str::to_string),
            places: user.places().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PlaceEnvelope {
    place: PlaceResponse,
}

#[derive(Debug, Serialize)]
struct PlacesEnvelope {
    places: Vec<PlaceResponse>,
}

#[derive(Debug, Serialize)]
struct UserEnvelope {
    user: UserResponse,
}

#[derive(Debug, Serialize)]
struct UsersEnvelope {
    users: Vec<UserResponse>,
}

#[derive(Debug, Serialize)]
struct LoginEnvelope {
    message: String,
    user: UserResponse,
}

#[derive(Debug, Serialize)]
struct MessageEnvelope {
    message: String,
}

// =============================================================================
// Error mapping
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Unauthorized(String),
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (
            status,
            Json(ErrorBody {
                message,
                code: status.as_u16(),
            }),
        )
            .into_response()
    }
}

impl From<PlaceError> for ApiError {
    fn from(e: PlaceError) -> Self {
        match &e {
            PlaceError::PlaceNotFound(_)
            | PlaceError::OwnerNotFound(_)
            | PlaceError::NoPlacesForOwner(_) => ApiError::NotFound(e.to_string()),
            PlaceError::Validation(_) => ApiError::Validation(e.to_string()),
            PlaceError::Geocode(_)
            | PlaceError::CreateFailed(_)
            | PlaceError::DeleteFailed(_)
            | PlaceError::UpdateFailed(_) => ApiError::Internal(e.to_string()),
            // Raw store errors never reach clients verbatim.
            PlaceError::Repo(_) => {
                ApiError::Internal("Something went wrong, please try again later".to_string())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match &e {
            UserError::EmailTaken | UserError::Validation(_) => {
                ApiError::Validation(e.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
            UserError::SignupFailed(_) | UserError::LoginFailed(_) | UserError::ListFailed(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_place_body(title: &str, description: &str, address: &str) -> CreatePlaceRequest {
        CreatePlaceRequest {
            title: title.to_string(),
            description: description.to_string(),
            address: address.to_string(),
            creator: Uuid::new_v4(),
            image: None,
        }
    }

    fn signup_body(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            image: None,
        }
    }

    #[test]
    fn create_place_rules_reject_bad_fields() {
        assert!(create_place_body("", "a nice spot", "1 Main St")
            .validate()
            .is_err());
        assert!(create_place_body("Cafe", "tiny", "1 Main St")
            .validate()
            .is_err());
        assert!(create_place_body("Cafe", "a nice spot", "")
            .validate()
            .is_err());
        assert!(create_place_body("Cafe", "a nice spot", "1 Main St")
            .validate()
            .is_ok());
    }

    #[test]
    fn signup_rules_bound_password_length() {
        assert!(signup_body("Alice", "a@x.com", "1234567").validate().is_err());
        assert!(signup_body("Alice", "a@x.com", "12345678").validate().is_ok());
        assert!(signup_body("Alice", "a@x.com", "12345678901234")
            .validate()
            .is_ok());
        assert!(signup_body("Alice", "a@x.com", "123456789012345")
            .validate()
            .is_err());
    }

    #[test]
    fn signup_rules_reject_short_name_and_bad_email() {
        assert!(signup_body("Al", "a@x.com", "12345678").validate().is_err());
        assert!(signup_body("Alice", "not-an-email", "12345678")
            .validate()
            .is_err());
    }

    #[test]
    fn validation_failure_carries_the_rule_message() {
        let errors = create_place_body("Cafe", "tiny", "1 Main St")
            .validate()
            .expect_err("invalid body");
        assert_eq!(
            first_validation_message(&errors),
            "Description must be at least 5 characters long"
        );
    }

    #[test]
    fn api_errors_map_to_expected_status_codes() {
        let cases = [
            (
                ApiError::Validation("bad".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (ApiError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Unauthorized("no".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn place_errors_collapse_to_the_right_api_kinds() {
        use crate::infrastructure::ports::{GeocodeError, RepoError};

        let owner_missing: ApiError = PlaceError::OwnerNotFound(UserId::new()).into();
        assert!(matches!(owner_missing, ApiError::NotFound(_)));

        let geocode: ApiError = PlaceError::Geocode(GeocodeError::NoMatch).into();
        assert!(matches!(geocode, ApiError::Internal(_)));

        let txn: ApiError =
            PlaceError::CreateFailed(RepoError::database("commit", "reset")).into();
        match txn {
            ApiError::Internal(msg) => {
                assert_eq!(msg, "Creating place failed, please try again")
            }
            other => panic!("expected Internal, got {:?}", other),
        }

        let store: ApiError = PlaceError::Repo(RepoError::unavailable("refused")).into();
        match store {
            ApiError::Internal(msg) => assert!(!msg.contains("refused")),
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[test]
    fn login_mismatch_maps_to_unauthorized() {
        let error: ApiError = UserError::InvalidCredentials.into();
        assert!(matches!(error, ApiError::Unauthorized(_)));

        let taken: ApiError = UserError::EmailTaken.into();
        assert!(matches!(taken, ApiError::Validation(_)));
    }
}
