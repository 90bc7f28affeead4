use std::borrow::Cow;

/// A specialized [`DatabaseError`] enum of this crate.
#[vhub_derive::vhub_error]
pub enum DatabaseError {
    /// Validation errors.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Occurs when connectivity or health checks fail.
    #[error("Database connection failed{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The statement violated a unique constraint.
    #[error("Unique constraint violated{}: {message}", format_context(.context))]
    UniqueViolation {
        message: Cow<'static, str>,
        /// Name of the violated constraint, when the server reports it.
        constraint: Option<String>,
        context: Option<Cow<'static, str>>,
    },

    /// A row could not be mapped into the requested shape.
    #[error("Row decoding failed{}: {message}", format_context(.context))]
    Decode { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A wrapper for underlying `sqlx` driver errors.
    #[error("SQL error{}: {source}", format_context(.context))]
    Sql {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Migration failures.
    #[error("Migration error{}: {source}", format_context(.context))]
    Migration {
        #[source]
        source: sqlx::migrate::MigrateError,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal database error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DatabaseError {
    /// Classifies a driver error, lifting unique violations into their own variant.
    pub(crate) fn from_sql(source: sqlx::Error, context: &'static str) -> Self {
        if let sqlx::Error::Database(db_err) = &source
            && db_err.is_unique_violation()
        {
            return Self::UniqueViolation {
                message: db_err.message().to_owned().into(),
                constraint: db_err.constraint().map(ToOwned::to_owned),
                context: Some(context.into()),
            };
        }
        Self::Sql { source, context: Some(context.into()) }
    }
}
