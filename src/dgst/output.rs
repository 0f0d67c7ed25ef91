// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: output
// Purpose: Render digest results into terminated lines and emit them
//          into caller-supplied sinks.

use crate::dgst::algorithm::DigestAlgorithm;
use std::io::{self, Write};

/// Terminator for every result line, on every platform.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Digest record produced per algorithm invocation.
#[derive(Clone, Debug)]
pub struct DigestResult {
	pub algorithm: DigestAlgorithm,
	pub digest: Vec<u8>,
	pub digest_hex: String,
}

impl DigestResult {
	pub fn from_digest(
		algorithm: DigestAlgorithm,
		digest: &[u8],
	) -> Self {
		Self {
			algorithm,
			digest: digest.to_vec(),
			digest_hex: hex::encode(digest),
		}
	}
}

/// Line shape for a batch of digest results.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderMode {
	/// A bare hex digest per line (single-algorithm invocations).
	Bare,
	/// `<NAME> <hex>` per line (multi-algorithm invocations).
	Labeled,
}

/// Build the result lines without their terminators.
pub fn render_lines(
	results: &[DigestResult],
	mode: RenderMode,
) -> Vec<String> {
	results
		.iter()
		.map(|result| match mode {
			RenderMode::Bare => result.digest_hex.clone(),
			RenderMode::Labeled => format!(
				"{} {}",
				result.algorithm, result.digest_hex
			),
		})
		.collect()
}

/// Write each line followed by the CRLF terminator.
pub fn emit_lines<W: Write>(
	writer: &mut W,
	lines: &[String],
) -> io::Result<()> {
	for line in lines {
		write!(writer, "{}{}", line, LINE_TERMINATOR)?;
	}
	writer.flush()
}
