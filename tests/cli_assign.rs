mod common;

use common::*;

#[test]
fn assign_with_standard_layers_when_no_descriptor() {
    let env = TestEnv::new();

    let result = env.run(&[
        "assign",
        "--json",
        "--resource",
        "org/springframework/boot/loader/launch/JarLauncher.class",
        "--resource",
        "com/example/App.class",
        "--library",
        "com.acme:core:1.0",
        "--library",
        "com.acme:edge:2.0-SNAPSHOT",
        "--module",
        "com.example:shared:1.0",
    ]);

    assert!(result.success, "{}", result.combined_output());
    let layers: Vec<_> = result.json()["assignments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["layer"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        layers,
        vec![
            "spring-boot-loader",
            "application",
            "dependencies",
            "snapshot-dependencies",
            "application",
        ]
    );
}

#[test]
fn assign_with_custom_descriptor() {
    let env = TestEnv::new();
    let path = env.write("custom.xml", FULL_DESCRIPTOR);

    let result = env.run(&[
        "assign",
        "--layers",
        path.to_str().unwrap(),
        "--library",
        "com.acme:core:1.0",
        "--library",
        "org.other:lib:3.1",
        "--module",
        "org.other:lib:3.1",
    ]);

    assert!(result.success, "{}", result.combined_output());
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{}", result.stdout);
    assert!(lines[0].ends_with("-> company-dependencies"), "{}", lines[0]);
    assert!(lines[1].ends_with("-> dependencies"), "{}", lines[1]);
    assert!(lines[2].ends_with("-> application"), "{}", lines[2]);
}

#[test]
fn assign_reports_unclaimed_resource() {
    let env = TestEnv::new();
    env.write("layers.xml", WORKED_EXAMPLE);

    let result = env.run(&["assign", "--resource", "com/other/Main.class"]);

    assert!(!result.success);
    assert!(
        result
            .stderr
            .contains("No layer defined in layers.xml for application resource 'com/other/Main.class'"),
        "{}",
        result.stderr
    );
}

#[test]
fn assign_without_fallback_requires_descriptor() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &["assign", "--resource", "a/B.class"],
        &[("LAYERTOOL_STANDARD_FALLBACK", "false")],
    );

    assert!(!result.success);
    assert!(result.stderr.contains("failed to read"), "{}", result.stderr);
}

#[test]
fn assign_requires_items() {
    let env = TestEnv::new();

    let result = env.run(&["assign", "--json"]);

    assert!(!result.success);
    assert_eq!(result.json()["event"], "error");
}

#[test]
fn assign_groups_items_by_kind() {
    let env = TestEnv::new();

    let result = env.run(&[
        "assign",
        "--json",
        "--module",
        "com.example:shared:1.0",
        "--library",
        "com.acme:core:1.0",
        "--resource",
        "com/example/App.class",
        "--library",
        "com.acme:util:1.0",
    ]);

    assert!(result.success, "{}", result.combined_output());
    let items: Vec<_> = result.json()["assignments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["item"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        items,
        vec![
            "com/example/App.class",
            "com.acme:core:1.0",
            "com.acme:util:1.0",
            "com.example:shared:1.0",
        ]
    );
}

#[test]
fn assign_help_describes_item_order() {
    let env = TestEnv::new();

    let result = env.run(&["assign", "--help"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stdout.contains("resources first, then libraries, then modules"),
        "{}",
        result.stdout
    );
}
