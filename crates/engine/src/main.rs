// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use conclave_crypto::{MasterSecret, MASTER_SECRET_ENV};
use conclave_engine::{process_request, Response};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const FALLBACK_ERROR: &str =
    r#"{"success":false,"result":null,"error":"could not serialize response"}"#;

fn main() -> ExitCode {
    // stdout is the wire; diagnostics go to stderr only.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // An unwinding panic still drops (and wipes) the master secret before
    // landing here; the envelope below is the best-effort error output.
    let (response, code) = match std::panic::catch_unwind(run) {
        Ok(Ok(value)) => (Response::ok(value), ExitCode::SUCCESS),
        Ok(Err(err)) => (Response::err(err.to_string()), ExitCode::FAILURE),
        Err(_) => (Response::err("internal error"), ExitCode::FAILURE),
    };

    let (body, code) = match serde_json::to_string(&response) {
        Ok(body) => (body, code),
        Err(_) => (FALLBACK_ERROR.to_string(), ExitCode::FAILURE),
    };

    let mut stdout = io::stdout();
    if stdout.write_all(body.as_bytes()).is_err() || stdout.flush().is_err() {
        return ExitCode::FAILURE;
    }
    code
}

fn run() -> anyhow::Result<serde_json::Value> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .map_err(|err| anyhow::anyhow!("failed to read input: {err}"))?;

    // Read exactly once per invocation. The buffer is wiped when `master`
    // drops, on the success path and on every error path out of here.
    let master = MasterSecret::from_env(MASTER_SECRET_ENV)?;

    process_request(&raw, &master)
}
