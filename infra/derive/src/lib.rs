#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`macro@vhub_error`] turns an enum into a context-aware error type and, on request,
//!   maps its variants onto HTTP status codes.
//! * [`macro@api_model`] and [`macro@api_handler`] keep DTOs and Axum handlers consistent
//!   with the published `OpenAPI` document.
//! * [`macro@vhub_slice`] wraps feature state into a shareable vertical slice handle.
//!
//! The doc examples are `ignore`d because expanded code refers to crates
//! (`thiserror`, `utoipa`, `vhub_kernel`) that this proc-macro crate cannot depend on.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to define a standard API data model.
///
/// # Injected Behaviors
///
/// * **Derives**: Adds `Debug`, `Serialize`, `Deserialize` and `utoipa::ToSchema` if missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Example
///
/// ```rust,ignore
/// use vhub_derive::api_model;
///
/// #[api_model]
/// pub struct RegisteredVendor {
///     pub vendor_slug: String, // serialized as `vendorSlug`
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts standard `utoipa::path` arguments such as `get`, `post`, `path = "..."`,
/// `responses(...)`, and `tag = "..."`.
///
/// # Example
///
/// ```rust,ignore
/// use vhub_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]` field.
/// * **Internal Fallback**: `From<&str>` and `From<String>` when an `Internal` variant exists.
/// * **HTTP Mapping**: When at least one variant carries `#[status(CODE)]`, implements
///   `vhub_kernel::server::error::HttpError`. `CODE` is an associated constant of
///   `StatusCode` (e.g. `NOT_FOUND`). Variants without the attribute map to
///   `INTERNAL_SERVER_ERROR`. The public message is the variant's `message` field, or the
///   canonical reason phrase when the variant has none.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vhub_derive::vhub_error]
/// pub enum VendorError {
///     #[status(NOT_FOUND)]
///     #[error("Vendor not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Database error{}: {source}", format_context(.context))]
///     Database { source: vhub_database::DatabaseError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn vhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a Vertical Slice handle.
///
/// 1. Generates a thread-safe `Arc` wrapper around `<Name>Inner`.
/// 2. Implements `Deref` for transparent access to the inner state.
/// 3. Implements `FeatureSlice` for registration in the Kernel.
///
/// The registry name defaults to the lowercased struct name and can be set with
/// `#[vhub_slice(name = "...")]`.
///
/// # Example
/// ```rust,ignore
/// #[vhub_derive::vhub_slice]
/// pub struct Vendors {
///     pub(crate) repository: VendorRepository,
/// }
///
/// let slice = Vendors::new(VendorsInner { repository });
/// ```
#[proc_macro_attribute]
pub fn vhub_slice(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(attr.into(), input).into()
}
