mod common;

use common::*;

#[test]
fn schema_text_shows_version_and_namespace() {
    let env = TestEnv::new();

    let result = env.run(&["schema"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.starts_with("layers.xml schema 3.5\n"), "{}", result.stdout);
    assert!(
        result
            .stdout
            .contains("namespace: http://www.springframework.org/schema/boot/layers"),
        "{}",
        result.stdout
    );
    assert!(result.stdout.contains("root: layers"), "{}", result.stdout);
}

#[test]
fn schema_json() {
    let env = TestEnv::new();

    let result = env.run(&["schema", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let json = result.json();
    assert_eq!(json["version"], "3.5");
    assert_eq!(json["root"], "layers");
    assert!(json["elements"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "layerOrder"));
}
