use std::borrow::Cow;
use vhub_derive::vhub_error;

#[vhub_error]
pub enum StoreError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Store rejected the row{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<Vec<u8>, StoreError> {
    std::fs::read("/definitely/missing").context("Reading fixture")
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().contains("(Reading fixture)"));

    let internal: StoreError = "boom".into();
    assert!(matches!(internal, StoreError::Internal { .. }));

    let rejected: Result<(), StoreError> =
        Err(StoreError::Rejected { message: "duplicate".into(), context: None });
    let rejected = rejected.context("Inserting row").unwrap_err();
    assert_eq!(rejected.to_string(), "Store rejected the row (Inserting row): duplicate");
}
