#[test]
fn avatar_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/avatar_error_pass.rs");
    t.pass("tests/ui/avatar_error_kind.rs");
}
