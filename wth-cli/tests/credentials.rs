use std::process::Command;

#[test]
fn missing_api_key_exits_before_any_request() {
    let output = Command::new(env!("CARGO_BIN_EXE_wth"))
        .arg("Paris")
        .env_remove("WEATHER_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .expect("wth binary must run");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, "❌ WEATHER_API_KEY environment variable is not set.\n");
}

#[test]
fn empty_api_key_counts_as_missing() {
    let output = Command::new(env!("CARGO_BIN_EXE_wth"))
        .env("WEATHER_API_KEY", "")
        .env_remove("RUST_LOG")
        .output()
        .expect("wth binary must run");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stderr).unwrap().lines().count(), 1);
}
