use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "tracegraph-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

const ONE_EVENT: &str =
    r#"{"events":{"a":[{"uid":"1","lineno":5,"target":"x","type":"read"}]},"tracingResult":{}}"#;

#[test]
fn trace_graph_writes_json_document() {
    let dir = unique_temp_dir("json");
    let input = write_file(&dir, "msg.json", ONE_EVENT);
    let out = dir.join("graph.json");

    let output = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args([
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("run trace_graph");
    assert!(
        output.status.success(),
        "trace_graph failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rendered messages=1 nodes=2 edges=0"), "stderr={stderr}");

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).expect("read graph.json"))
        .expect("parse graph.json");
    let nodes = v["nodes"].as_array().expect("nodes array");
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["id"], "5");
    assert_eq!(nodes[1]["label"], "x: read : 1");
    assert_eq!(v["options"]["interaction"]["dragNodes"], false);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_graph_rebuilds_per_line_delimited_message() {
    let dir = unique_temp_dir("ndjson");
    let second = r#"{"events":{"b":[{"uid":"p","lineno":9,"target":"y","type":"mutation"},{"uid":"q","lineno":10,"target":"y","type":"mutation"}]},"tracingResult":{"q":["p"]}}"#;
    let input = write_file(&dir, "msgs.ndjson", &format!("{ONE_EVENT}\n{second}\n"));

    let output = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args(["--input", input.to_str().unwrap(), "--format", "dot"])
        .output()
        .expect("run trace_graph");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("digraph trace").count(), 1);
    assert!(!stdout.contains("x: read : 1"));
    assert!(stdout.contains("\"p\" -> \"q\";"));
    assert!(stdout.contains("\"9\" -> \"10\" [style=invis];"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rendered messages=2 nodes=4 edges=2"), "stderr={stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_graph_reads_stdin_and_applies_overrides() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args(["--container-id", "canvas", "--background", "#123456"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn trace_graph");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(ONE_EVENT.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait trace_graph");
    assert!(output.status.success());

    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("<div id=\"canvas\" style="));
    assert!(html.contains("\"background\":\"#123456\""));
}

#[test]
fn trace_graph_fails_on_dangling_edge_with_error_policy() {
    let dir = unique_temp_dir("dangling");
    let input = write_file(
        &dir,
        "msg.json",
        r#"{"events":{"a":[{"uid":"1","lineno":1,"target":"x","type":"read"}]},"tracingResult":{"1":["missing"]}}"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args(["--input", input.to_str().unwrap(), "--dangling", "error"])
        .output()
        .expect("run trace_graph");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown node \"missing\""), "stderr={stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_graph_rejects_malformed_input() {
    let dir = unique_temp_dir("malformed");
    let input = write_file(&dir, "msg.json", r#"{"tracingResult":{}}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args(["--input", input.to_str().unwrap()])
        .output()
        .expect("run trace_graph");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse trace message"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_graph_config_file_is_overridden_by_flags() {
    let dir = unique_temp_dir("config");
    let config = write_file(
        &dir,
        "config.json",
        r##"{ "container_id": "from-file", "background_color": "#000000", "dangling": "error" }"##,
    );
    let input = write_file(&dir, "msg.json", ONE_EVENT);

    let output = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args([
            "--input",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--background",
            "#abcdef",
            "--vis-js-url",
            "http://localhost/vis.js",
        ])
        .output()
        .expect("run trace_graph");
    assert!(
        output.status.success(),
        "trace_graph failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("background: #abcdef;"));
    assert!(!html.contains("#000000"));
    assert!(html.contains("<div id=\"from-file\""));
    assert!(html.contains("<script src=\"http://localhost/vis.js\"></script>"));

    let dangling = write_file(
        &dir,
        "dangling.json",
        r#"{"events":{"a":[{"uid":"1","lineno":1,"target":"x","type":"read"}]},"tracingResult":{"1":["missing"]}}"#,
    );
    let output = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args([
            "--input",
            dangling.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--background",
            "#abcdef",
        ])
        .output()
        .expect("run trace_graph");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown node \"missing\""), "stderr={stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_graph_rewrites_out_file_for_each_message() {
    let dir = unique_temp_dir("ndjson-out");
    let second = r#"{"events":{"b":[{"uid":"p","lineno":9,"target":"y","type":"mutation"}]},"tracingResult":{}}"#;
    let input = write_file(&dir, "msgs.ndjson", &format!("{ONE_EVENT}\n{second}\n"));
    let out = dir.join("graph.json");

    let output = Command::new(env!("CARGO_BIN_EXE_trace_graph"))
        .args([
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("run trace_graph");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rendered messages=2 nodes=2 edges=0"), "stderr={stderr}");

    let raw = fs::read_to_string(&out).expect("read graph.json");
    let v: Value = serde_json::from_str(&raw).expect("parse graph.json");
    let ids = v["nodes"]
        .as_array()
        .expect("nodes array")
        .iter()
        .map(|n| n["id"].as_str().expect("id").to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["9", "p"]);
    assert!(!raw.contains("x: read : 1"));

    let _ = fs::remove_dir_all(&dir);
}
