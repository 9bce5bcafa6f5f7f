// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use crate::config::consts::HOST;
use crate::error::{Error, Result};

/// Seam between the answer engine and the network.
///
/// `path` is site-absolute ("/buchstabe-b"). Implementations must fail
/// loudly on non-success status rather than hand back an error page.
pub trait Fetch {
    fn fetch(&self, path: &str) -> Result<String>;
}

/// Production fetcher: plain blocking GET against the answer site.
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String> {
        http_get(path)
    }
}

pub fn http_get(path: &str) -> Result<String> {
    let err = |e: &dyn std::fmt::Display| Error::RemoteFetch(format!("{}{}: {}", HOST, path, e));

    let mut s = TcpStream::connect((HOST, 80)).map_err(|e| err(&e))?;
    s.set_read_timeout(Some(Duration::from_secs(15))).map_err(|e| err(&e))?;
    s.set_write_timeout(Some(Duration::from_secs(15))).map_err(|e| err(&e))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: slf_bot/0.3\r\nConnection: close\r\n\r\n",
        path, HOST
    );
    s.write_all(req.as_bytes()).map_err(|e| err(&e))?;
    s.flush().map_err(|e| err(&e))?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(|e| err(&e))?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(Error::RemoteFetch(format!("HTTP error: {} {}{}", status, HOST, path)));
    }
    let body_idx = resp.find("\r\n\r\n").ok_or_else(|| err(&"malformed HTTP response"))? + 4;
    Ok(resp[body_idx..].to_string())
}
