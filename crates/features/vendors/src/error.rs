use std::borrow::Cow;
use vhub_database::DatabaseError;

/// Failures of the vendor slice, each mapped to the status its clients see.
#[vhub_derive::vhub_error]
pub enum VendorError {
    /// The validation step did not hand over its result.
    #[status(NOT_FOUND)]
    #[error("Registration precondition missing{}: {message}", format_context(.context))]
    PreconditionMissing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(BAD_REQUEST)]
    #[error("Invalid registration{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(PAYLOAD_TOO_LARGE)]
    #[error("Registration payload too large{}: {message}", format_context(.context))]
    PayloadTooLarge { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(UNAUTHORIZED)]
    #[error("Unauthenticated{}: {message}", format_context(.context))]
    Unauthenticated { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(NOT_FOUND)]
    #[error("Vendor not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The store accepted the statement but did not persist the row.
    #[status(INTERNAL_SERVER_ERROR)]
    #[error("Vendor persistence failed{}: {message}", format_context(.context))]
    Persistence { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Database error{}: {source}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },

    #[error("Internal vendor error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
