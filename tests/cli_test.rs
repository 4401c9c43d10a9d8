use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(cwd: &Path, args: &[&str], config: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_intentgraph"));
    cmd.current_dir(cwd).args(args).env_remove("RUST_LOG");
    match config {
        Some(path) => cmd.env("INTENTGRAPH_CONFIG", path),
        None => cmd.env_remove("INTENTGRAPH_CONFIG"),
    };
    cmd.output().expect("failed to run intentgraph")
}

fn write_agent(root: &Path) {
    let intents = root.join("intents");
    fs::create_dir_all(&intents).unwrap();
    fs::write(
        intents.join("Greeting.json"),
        r#"{"id": "greeting", "name": "Greeting", "contexts": [],
            "responses": [{"affectedContexts": [{"name": "greeted", "lifespan": 5}]}]}"#,
    )
    .unwrap();
    fs::write(
        intents.join("Farewell.json"),
        r#"{"id": "farewell", "name": "Farewell", "contexts": ["greeted"],
            "responses": [{"affectedContexts": []}]}"#,
    )
    .unwrap();
    fs::write(intents.join("Greeting_usersays_pt-br.json"), "[]").unwrap();
}

#[test]
fn test_nonexistent_agent_dir_exits_1() {
    let work = TempDir::new().unwrap();
    let output = run_in(work.path(), &["does-not-exist"], None);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR: 'does-not-exist' is not a valid directory"), "{}", stdout);
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0, "no output expected");
}

#[test]
fn test_invalid_fulfillment_map_exits_1() {
    let work = TempDir::new().unwrap();
    let agent = work.path().join("agent");
    write_agent(&agent);

    let output = run_in(work.path(), &["agent", "-f", "missing-map.json"], None);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR: 'missing-map.json' is not a valid file"), "{}", stdout);
    assert!(!work.path().join("intent_graph.gv").exists());
}

#[test]
fn test_malformed_intent_fails() {
    let work = TempDir::new().unwrap();
    let agent = work.path().join("agent");
    fs::create_dir_all(&agent).unwrap();
    fs::write(agent.join("Broken.json"), r#"{"id": "broken"}"#).unwrap();

    let output = run_in(work.path(), &["agent"], None);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed intent record"), "{}", stderr);
    assert!(!work.path().join("intent_graph.gv").exists());
}

#[cfg(unix)]
#[test]
fn test_renders_with_configured_backend() {
    let work = TempDir::new().unwrap();
    let agent = work.path().join("agent");
    write_agent(&agent);
    let map = work.path().join("map.json");
    fs::write(&map, "{}").unwrap();

    let config = work.path().join("intentgraph.toml");
    fs::write(
        &config,
        "[render]\noutput_dir = \"out\"\ndot_binary = \"true\"\nview = false\n",
    )
    .unwrap();

    let output = run_in(work.path(), &["agent", "-f", "map.json"], Some(&config));
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let dot = fs::read_to_string(work.path().join("out/intent_graph.gv")).unwrap();
    assert!(dot.contains("\"greeting\" [label=\"Greeting\"]"));
    assert!(dot.contains("\"farewell\" [label=\"Farewell\"]"));
    assert!(dot.contains("\"greeting\" -> \"farewell\""));
    assert_eq!(dot.matches("->").count(), 1);
}
