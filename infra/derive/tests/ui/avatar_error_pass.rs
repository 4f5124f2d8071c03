use avatar_derive::avatar_error;
use std::borrow::Cow;

#[avatar_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid catalog{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
    io.context("Reading the catalog")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading the catalog): disk gone");

    assert_eq!(err.kind(), "Io");

    let invalid = DemoError::Invalid { message: "empty".into(), context: None };
    assert_eq!(invalid.to_string(), "Invalid catalog: empty");
    assert_eq!(invalid.kind(), "Invalid");
}
