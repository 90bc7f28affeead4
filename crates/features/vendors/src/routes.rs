use crate::Vendors;
use crate::dto::{RegisterVendorRequest, RegisteredVendor, VendorProfile};
use crate::model::{AuthenticatedVendor, ValidatedRegistrationInput};
use crate::service;
use crate::validation::validate_registration;
use axum::Extension;
use axum::extract::State;
use axum::middleware;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vhub_derive::api_handler;
use vhub_domain::constants::VENDORS_TAG;
use vhub_kernel::server::error::ErrorBody;
use vhub_kernel::server::{ApiError, ApiResponse, ApiState};

/// Mount point of the vendor endpoints.
pub const BASE_PATH: &str = "/api/v1/vendors";

#[api_handler(
    post,
    path = "/register",
    request_body = RegisterVendorRequest,
    responses(
        (status = OK, description = "Vendor registered", body = ApiResponse<RegisteredVendor>),
        (status = BAD_REQUEST, description = "Invalid registration payload", body = ErrorBody),
        (status = PAYLOAD_TOO_LARGE, description = "Registration body too large", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Vendor could not be stored", body = ErrorBody),
    ),
    tag = VENDORS_TAG,
)]
pub(crate) async fn register_handler(
    State(state): State<ApiState>,
    input: Option<Extension<ValidatedRegistrationInput>>,
) -> Result<ApiResponse<RegisteredVendor>, ApiError> {
    let vendors = state.try_get_slice::<Vendors>()?;
    let input = input.map(|Extension(input)| input);

    Ok(service::register_vendor(&vendors.repository, input).await?)
}

#[api_handler(
    get,
    path = "/me",
    responses(
        (status = OK, description = "Profile of the calling vendor", body = ApiResponse<VendorProfile>),
        (status = UNAUTHORIZED, description = "No vendor identity", body = ErrorBody),
        (status = NOT_FOUND, description = "Vendor does not exist", body = ErrorBody),
    ),
    tag = VENDORS_TAG,
)]
pub(crate) async fn profile_handler(
    State(state): State<ApiState>,
    identity: Option<Extension<AuthenticatedVendor>>,
) -> Result<ApiResponse<VendorProfile>, ApiError> {
    let vendors = state.try_get_slice::<Vendors>()?;
    let identity = identity.map(|Extension(identity)| identity);

    Ok(service::get_vendor(&vendors.repository, identity.as_ref()).await?)
}

/// Vendor routes, nested under [`BASE_PATH`].
///
/// Registration runs behind the validation middleware; the profile route expects an
/// [`AuthenticatedVendor`] extension from an outer authentication layer.
pub fn router(state: &ApiState) -> OpenApiRouter<ApiState> {
    let registration = OpenApiRouter::new()
        .routes(routes!(register_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), validate_registration));
    let profile = OpenApiRouter::new().routes(routes!(profile_handler));

    OpenApiRouter::new().nest(BASE_PATH, registration.merge(profile))
}
