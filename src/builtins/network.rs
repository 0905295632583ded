/*
 * ==========================================================================
 * KOALCODE - Code that Clings!
 * ==========================================================================
 *
 * Network Collaborators
 * ---------------------
 * HTTP requests, raw TCP sockets and a ping probe, reachable only
 * through the builtin-dispatch boundary. These are ordinary name-matched
 * calls; they do not affect parsing, scoping or evaluation order, and
 * every failure is diagnosed on stderr and reported as a 0 status, never
 * as a fatal error.
 *
 * --------------------------------------------------------------------------
 * License:
 * This file is part of the KoalCode programming language project.
 *
 * KoalCode is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::time::Duration;

use crate::ast::Expr;
use crate::builtins::BuiltinRegistry;

/// HTTP requests give up after this long, end to end.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default receive buffer size for `socket.recv`.
const RECV_BUFFER_SIZE: usize = 1024;

/// Collaborator state owned by the interpreter: the lazily-built HTTP
/// client and the table of open sockets keyed by script-visible handle.
pub struct NetworkRuntime {
    initialized: bool,
    client: Option<reqwest::blocking::Client>,
    sockets: HashMap<i64, TcpStream>,
    next_socket: i64,
}

impl NetworkRuntime {
    pub fn new() -> Self {
        Self {
            initialized: false,
            client: None,
            sockets: HashMap::new(),
            next_socket: 1,
        }
    }
}

impl Default for NetworkRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// These collaborators inspect their arguments as raw expressions and
/// only accept literals, mirroring the host boundary they wrap: a URL,
/// host or payload must be a string literal, a socket handle or port a
/// number literal.
fn str_arg(args: &[Expr], index: usize) -> Option<&str> {
    match args.get(index) {
        Some(Expr::Str(s)) => Some(s),
        _ => None,
    }
}

fn num_arg(args: &[Expr], index: usize) -> Option<f64> {
    match args.get(index) {
        Some(Expr::Number(n)) => Some(*n),
        _ => None,
    }
}

pub fn install(registry: &mut BuiltinRegistry) {
    // ------------------------------------------------------------------
    // network.init() / network.quit()
    // ------------------------------------------------------------------
    registry.define_builtin(
        "network.init",
        Arc::new(|interp, _args, _frame| {
            if interp.network.initialized {
                return Ok(1.0);
            }
            match reqwest::blocking::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
            {
                Ok(client) => {
                    interp.network.client = Some(client);
                    interp.network.initialized = true;
                    Ok(1.0)
                }
                Err(err) => {
                    eprintln!("network.init: failed to build http client: {}", err);
                    Ok(0.0)
                }
            }
        }),
    );

    registry.define_builtin(
        "network.quit",
        Arc::new(|interp, _args, _frame| {
            if !interp.network.initialized {
                return Ok(0.0);
            }
            interp.network.client = None;
            interp.network.initialized = false;
            Ok(1.0)
        }),
    );

    // ------------------------------------------------------------------
    // http.get(url) / http.post(url, data)
    // ------------------------------------------------------------------
    registry.define_builtin(
        "http.get",
        Arc::new(|interp, args, _frame| {
            let Some(url) = str_arg(args, 0) else {
                eprintln!("http.get: URL must be a string");
                return Ok(0.0);
            };
            let Some(client) = &interp.network.client else {
                eprintln!("http.get: network not initialized");
                return Ok(0.0);
            };

            match client.get(url).send() {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().unwrap_or_default();
                    println!("HTTP GET Response ({}): {}", status, body);
                    Ok(f64::from(status))
                }
                Err(err) => {
                    eprintln!("http.get failed: {}", err);
                    Ok(0.0)
                }
            }
        }),
    );

    registry.define_builtin(
        "http.post",
        Arc::new(|interp, args, _frame| {
            let Some(url) = str_arg(args, 0) else {
                eprintln!("http.post: URL must be a string");
                return Ok(0.0);
            };
            let Some(data) = str_arg(args, 1) else {
                eprintln!("http.post: data must be a string");
                return Ok(0.0);
            };
            let Some(client) = &interp.network.client else {
                eprintln!("http.post: network not initialized");
                return Ok(0.0);
            };

            match client.post(url).body(data.to_string()).send() {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().unwrap_or_default();
                    println!("HTTP POST Response ({}): {}", status, body);
                    Ok(f64::from(status))
                }
                Err(err) => {
                    eprintln!("http.post failed: {}", err);
                    Ok(0.0)
                }
            }
        }),
    );

    // ------------------------------------------------------------------
    // socket.connect / socket.send / socket.recv / socket.close
    // ------------------------------------------------------------------
    registry.define_builtin(
        "socket.connect",
        Arc::new(|interp, args, _frame| {
            let Some(host) = str_arg(args, 0) else {
                eprintln!("socket.connect: host must be a string");
                return Ok(0.0);
            };
            let Some(port) = num_arg(args, 1) else {
                eprintln!("socket.connect: port must be a number");
                return Ok(0.0);
            };

            match TcpStream::connect((host, port as u16)) {
                Ok(stream) => {
                    let handle = interp.network.next_socket;
                    interp.network.next_socket += 1;
                    interp.network.sockets.insert(handle, stream);
                    println!("Connected to {}:{}", host, port as u16);
                    Ok(handle as f64)
                }
                Err(err) => {
                    eprintln!("socket.connect: connection failed: {}", err);
                    Ok(0.0)
                }
            }
        }),
    );

    registry.define_builtin(
        "socket.send",
        Arc::new(|interp, args, _frame| {
            let Some(handle) = num_arg(args, 0) else {
                eprintln!("socket.send: socket must be a number");
                return Ok(0.0);
            };
            let Some(data) = str_arg(args, 1) else {
                eprintln!("socket.send: data must be a string");
                return Ok(0.0);
            };

            let Some(stream) = interp.network.sockets.get_mut(&(handle as i64)) else {
                eprintln!("socket.send: unknown socket {}", handle as i64);
                return Ok(0.0);
            };

            match stream.write(data.as_bytes()) {
                Ok(sent) => {
                    println!("Sent {} bytes: {}", sent, data);
                    Ok(sent as f64)
                }
                Err(err) => {
                    eprintln!("socket.send: send failed: {}", err);
                    Ok(0.0)
                }
            }
        }),
    );

    registry.define_builtin(
        "socket.recv",
        Arc::new(|interp, args, _frame| {
            let Some(handle) = num_arg(args, 0) else {
                eprintln!("socket.recv: socket must be a number");
                return Ok(0.0);
            };
            let size = match num_arg(args, 1) {
                Some(n) if n >= 1.0 => n as usize,
                _ => RECV_BUFFER_SIZE,
            };

            let Some(stream) = interp.network.sockets.get_mut(&(handle as i64)) else {
                eprintln!("socket.recv: unknown socket {}", handle as i64);
                return Ok(0.0);
            };

            let mut buffer = vec![0u8; size];
            match stream.read(&mut buffer) {
                Ok(received) => {
                    let text = String::from_utf8_lossy(&buffer[..received]);
                    println!("Received {} bytes: {}", received, text);
                    Ok(received as f64)
                }
                Err(err) => {
                    eprintln!("socket.recv: recv failed: {}", err);
                    Ok(0.0)
                }
            }
        }),
    );

    registry.define_builtin(
        "socket.close",
        Arc::new(|interp, args, _frame| {
            let Some(handle) = num_arg(args, 0) else {
                eprintln!("socket.close: socket must be a number");
                return Ok(0.0);
            };

            // Dropping the stream closes the connection.
            if interp.network.sockets.remove(&(handle as i64)).is_none() {
                eprintln!("socket.close: unknown socket {}", handle as i64);
                return Ok(0.0);
            }

            println!("Socket {} closed", handle as i64);
            Ok(1.0)
        }),
    );

    // ------------------------------------------------------------------
    // network.ping(host)
    // ------------------------------------------------------------------
    registry.define_builtin(
        "network.ping",
        Arc::new(|_interp, args, _frame| {
            let Some(host) = str_arg(args, 0) else {
                eprintln!("network.ping: host must be a string");
                return Ok(0.0);
            };

            let status = Command::new("ping")
                .args(["-c", "1", host])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();

            match status {
                Ok(status) if status.success() => Ok(1.0),
                _ => Ok(0.0),
            }
        }),
    );
}
