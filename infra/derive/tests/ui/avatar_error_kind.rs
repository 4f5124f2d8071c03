use avatar_derive::avatar_error;
use std::borrow::Cow;

#[avatar_error]
pub enum RenderError {
    #[error("Rasterization failed{}: {message}", format_context(.context))]
    Rasterization { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = RenderError::Rasterization { message: "zero width".into(), context: None };
    assert_eq!(err.kind(), "Rasterization");

    let err = Err::<(), _>(err).context("Encoding PNG").unwrap_err();
    assert_eq!(err.to_string(), "Rasterization failed (Encoding PNG): zero width");
}
