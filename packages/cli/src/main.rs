//! `hubspec`: Farcaster Hub HTTP API contract command-line interface.
//!
//! - **`schema`**: print the OpenAPI document (JSON or YAML).
//! - **`routes`**: list the documented operations.
//! - **`check`**: check a saved response against an operation's contract.
//! - **`render`**: print a human-readable view of messages or events.
//! - **`call`**: issue a request to a hub and check the answer.
//! - **`submit`**: POST an encoded message to a hub.
//!
//! Exit codes: 0 on success, 1 on a contract violation, 2 on a usage or I/O
//! error. File arguments accept `-` for stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use hubspec::render::{render_event, render_message, render_messages, render_on_chain_event};
use hubspec::{HubEvent, Message, OnChainEvent};
use hubspec_api::check::check_error;
use hubspec_api::{
    check_query, check_response, document, document_yaml, DocOptions, Method, Operation,
    QueryMap, API_KEY_HEADER, CATALOG, DEFAULT_SERVER_URL,
};
use serde_json::Value;

/// hubspec: Farcaster Hub HTTP API contract CLI
#[derive(Parser)]
#[command(name = "hubspec", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the OpenAPI 3.0 document.
    Schema {
        /// Emit YAML instead of JSON.
        #[arg(long)]
        yaml: bool,

        /// Entry for `servers[]`. Repeat for several; defaults to the public
        /// hub endpoint.
        #[arg(long = "server", value_name = "URL")]
        servers: Vec<String>,
    },

    /// List every documented operation: method, path and operationId.
    Routes,

    /// Check a saved response body against an operation's contract.
    ///
    /// Exits 0 if the body conforms, 1 otherwise.
    ///
    /// Examples:
    ///   hubspec check ListCastsByFid casts.json
    ///   hubspec check GetUserDataByFid - -p fid=2 -p user_data_type=1 < ud.json
    Check {
        /// operationId from `hubspec routes` (case-insensitive).
        operation: String,

        /// Path to a JSON file, or `-` for stdin.
        file: PathBuf,

        /// Query parameter of the request that produced the body, as
        /// `name=value`. Selects the branch of dual-shape responses.
        #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Check the body as an error envelope instead.
        #[arg(long)]
        error: bool,
    },

    /// Render a message, list of messages, page, or hub event as text.
    Render {
        /// Path to a JSON file, or `-` for stdin.
        file: PathBuf,
    },

    /// Call a GET operation on a hub and check the response.
    ///
    /// Example:
    ///   hubspec call GetCastById -p fid=2 -p hash=0xd2b1... --hub http://localhost:3000
    Call {
        /// operationId from `hubspec routes` (case-insensitive).
        operation: String,

        /// Query parameter as `name=value`. Repeat for several.
        #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        #[command(flatten)]
        hub: HubArgs,
    },

    /// POST an encoded message to `submitMessage` (or `validateMessage`).
    Submit {
        /// Path to the message bytes, or `-` for stdin.
        file: PathBuf,

        /// Only validate; the hub does not merge the message.
        #[arg(long)]
        validate_only: bool,

        #[command(flatten)]
        hub: HubArgs,
    },
}

#[derive(clap::Args)]
struct HubArgs {
    /// Base URL of the hub.
    #[arg(long, env = "HUBSPEC_HUB_URL", default_value = DEFAULT_SERVER_URL)]
    hub: String,

    /// Value of the `x-airstack-hubs` header.
    #[arg(long, env = "HUBSPEC_API_KEY")]
    api_key: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Schema { yaml, servers } => {
            let options = if servers.is_empty() {
                DocOptions::default()
            } else {
                DocOptions { servers }
            };
            if yaml {
                let text = document_yaml(&options)
                    .unwrap_or_else(|e| fatal(&format!("failed to render YAML: {e}")));
                print!("{text}");
            } else {
                println!("{}", pretty(&document(&options)));
            }
        }

        Command::Routes => {
            for op in CATALOG {
                println!("{:<5} {:<38} {}", op.method.as_str(), op.path, op.operation_id);
            }
        }

        Command::Check {
            operation,
            file,
            params,
            error,
        } => {
            let op = find_operation(&operation);
            let body = parse_json(&read_input(&file));
            let query: QueryMap = params.into_iter().collect();
            let result = if error {
                check_error(&body).map(drop)
            } else {
                check_response(op, &query, &body)
            };
            match result {
                Ok(()) => println!("conforms to {}", op.operation_id),
                Err(e) => violation(&e.to_string()),
            }
        }

        Command::Render { file } => {
            let body = parse_json(&read_input(&file));
            match render_value(&body) {
                Some(text) => print!("{text}"),
                None => fatal("input is not a message, page of messages, or hub event"),
            }
        }

        Command::Call {
            operation,
            params,
            hub,
        } => {
            let op = find_operation(&operation);
            if op.method != Method::Get {
                fatal(&format!(
                    "{} takes a request body; use `hubspec submit`",
                    op.operation_id
                ));
            }
            let query: QueryMap = params.into_iter().collect();
            if let Err(e) = check_query(op, &query) {
                fatal(&format!("invalid request: {e}"));
            }

            let request = client()
                .get(endpoint(&hub.hub, op))
                .query(&query.iter().collect::<Vec<_>>());
            let (status, body) = send(with_key(request, &hub));
            println!("{}", pretty(&body));
            check_answer(op, &query, status, &body);
        }

        Command::Submit {
            file,
            validate_only,
            hub,
        } => {
            let id = if validate_only {
                "ValidateMessage"
            } else {
                "SubmitMessage"
            };
            let op = find_operation(id);
            let bytes = read_bytes(&file);

            let request = client()
                .post(endpoint(&hub.hub, op))
                .header("content-type", "application/octet-stream")
                .body(bytes);
            let (status, body) = send(with_key(request, &hub));
            println!("{}", pretty(&body));
            check_answer(op, &QueryMap::new(), status, &body);
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

fn client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|e| fatal(&format!("failed to build HTTP client: {e}")))
}

fn endpoint(hub: &str, op: &Operation) -> String {
    format!("{}{}", hub.trim_end_matches('/'), op.path)
}

fn with_key(
    request: reqwest::blocking::RequestBuilder,
    hub: &HubArgs,
) -> reqwest::blocking::RequestBuilder {
    match &hub.api_key {
        Some(key) => request.header(API_KEY_HEADER, key),
        None => request,
    }
}

/// Send a request and decode the JSON answer, whatever its status.
fn send(request: reqwest::blocking::RequestBuilder) -> (u16, Value) {
    let response = request
        .send()
        .unwrap_or_else(|e| fatal(&format!("request failed: {e}")));
    let status = response.status().as_u16();
    let text = response
        .text()
        .unwrap_or_else(|e| fatal(&format!("failed to read response: {e}")));
    match serde_json::from_str(&text) {
        Ok(body) => (status, body),
        Err(_) => violation(&format!("HTTP {status}: response is not JSON: {text}")),
    }
}

/// Successful answers must match the operation, failures the error envelope.
fn check_answer(op: &Operation, query: &QueryMap, status: u16, body: &Value) {
    if (200..300).contains(&status) {
        if let Err(e) = check_response(op, query, body) {
            violation(&e.to_string());
        }
        return;
    }
    if let Err(e) = check_error(body) {
        violation(&format!("HTTP {status}: {e}"));
    }
    eprintln!(
        "hubspec: HTTP {status} {}",
        body["errCode"].as_str().unwrap_or_default()
    );
    process::exit(1);
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn find_operation(id: &str) -> &'static Operation {
    Operation::find(id)
        .unwrap_or_else(|| fatal(&format!("unknown operation {id:?}; see `hubspec routes`")))
}

/// Parse a `name=value` query parameter.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got {raw:?}")),
    }
}

fn read_bytes(path: &Path) -> Vec<u8> {
    if path.to_str() == Some("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {e}")));
        buf
    } else {
        fs::read(path).unwrap_or_else(|e| fatal(&format!("failed to read {}: {e}", path.display())))
    }
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &Path) -> String {
    String::from_utf8(read_bytes(path)).unwrap_or_else(|_| fatal("input is not UTF-8"))
}

fn parse_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| fatal(&format!("input is not JSON: {e}")))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render whichever shape `value` has, or `None` if it is not recognised.
fn render_value(value: &Value) -> Option<String> {
    let decode = |v: &Value| serde_json::from_value::<Message>(v.clone()).ok();

    match value {
        Value::Array(items) => items
            .iter()
            .map(decode)
            .collect::<Option<Vec<_>>>()
            .map(|messages| render_messages(&messages)),
        Value::Object(map) if map.contains_key("messages") => {
            let messages: Vec<Message> = serde_json::from_value(map["messages"].clone()).ok()?;
            let mut out = render_messages(&messages);
            if let Some(token) = map.get("nextPageToken").and_then(Value::as_str) {
                if !token.is_empty() {
                    out.push_str(&format!("\nnext page: {token}\n"));
                }
            }
            Some(out)
        }
        Value::Object(map) if map.contains_key("events") => {
            let events = map["events"].as_array()?;
            let mut out = String::new();
            for event in events {
                if let Ok(e) = serde_json::from_value::<HubEvent>(event.clone()) {
                    out.push_str(&render_event(&e));
                } else {
                    let e: OnChainEvent = serde_json::from_value(event.clone()).ok()?;
                    out.push_str(&render_on_chain_event(&e));
                    out.push('\n');
                }
            }
            Some(out)
        }
        Value::Object(map) if map.contains_key("data") => decode(value).map(|m| render_message(&m)),
        Value::Object(_) => serde_json::from_value::<HubEvent>(value.clone())
            .ok()
            .map(|e| render_event(&e)),
        _ => None,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Report a contract violation and exit with code 1.
fn violation(msg: &str) -> ! {
    eprintln!("hubspec: violation: {msg}");
    process::exit(1);
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("hubspec: {msg}");
    process::exit(2);
}
