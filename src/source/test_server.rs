/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
//! One-shot HTTP server on localhost, for running real responses through the
//! client.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// A raw HTTP/1.1 response with a body.
pub fn response(status: &str, content_type: &str, body: &str) -> String {
	format!(
		"HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\
		 Connection: close\r\n\r\n{}",
		status,
		content_type,
		body.len(),
		body
	)
}

/// Answers exactly one request with `response`. Returns the base URL and a
/// channel that yields the request line the server saw.
pub fn serve_once(response: String) -> (String, Receiver<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	let (tx, rx) = mpsc::channel();

	thread::spawn(move || {
		let (mut stream, _) = listener.accept().unwrap();

		// read the whole head before answering
		let mut request = Vec::new();
		let mut buf = [0u8; 512];
		while !request.windows(4).any(|w| w == b"\r\n\r\n") {
			match stream.read(&mut buf) {
				Ok(0) | Err(_) => break,
				Ok(n) => request.extend_from_slice(&buf[..n]),
			}
		}

		let head = String::from_utf8_lossy(&request);
		let _ = tx.send(head.lines().next().unwrap_or_default().to_string());
		let _ = stream.write_all(response.as_bytes());
	});

	(format!("http://{}", addr), rx)
}
