use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread::JoinHandle;

use tempfile::TempDir;

pub const SAMPLE_CONFIG: &str = "\
model: gpt-4o-mini
temperature: 0.2
prompt: |
  Tag each speaker turn.

  {transcript}
";

const PROXY_VARS: &[&str] = &[
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Isolated working directory for one binary invocation.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary working dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.path("config.yaml"), contents).expect("write config file");
    }

    pub fn write_input(&self, contents: &str) {
        std::fs::write(self.path("input.txt"), contents).expect("write input file");
    }

    /// Run with `--input input.txt --output output.txt`.
    pub fn run_tagger(&self, envs: &[(&str, &str)]) -> Output {
        self.run(&["--input", "input.txt", "--output", "output.txt"], envs)
    }

    pub fn run(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_transcript-tagger"));
        cmd.args(args)
            .current_dir(self.dir.path())
            .env_remove("OPENAI_API_KEY")
            .env_remove("OPENAI_BASE_URL")
            .env_remove("RUST_LOG");
        for proxy in PROXY_VARS {
            cmd.env_remove(proxy);
        }
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to execute transcript-tagger binary")
    }
}

pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout:\n{}\nstderr:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

/// One-shot HTTP server answering a single request with a canned response.
///
/// The join handle yields the raw request body it received.
#[allow(dead_code)]
pub fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream);

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read request line");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().expect("parse content-length");
                }
            }
        }

        let mut request_body = vec![0u8; content_length];
        reader
            .read_exact(&mut request_body)
            .expect("read request body");

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let mut stream = reader.into_inner();
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        stream.flush().expect("flush response");

        String::from_utf8(request_body).expect("request body is utf-8")
    });

    (base_url, handle)
}
