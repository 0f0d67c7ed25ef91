// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Digest command handlers

use crate::dgst::algorithm::{AlgorithmMatrix, AlgorithmSelector};
use crate::dgst::output::{render_lines, emit_lines, RenderMode};
use crate::dgst::runner::{DigestError, DigestRunner};
use std::error::Error;
use std::io::Write;

/// Digest a message with the selected algorithm (or the ALL
/// sentinel) and write one terminated line per result.
pub fn digest_message<W: Write>(
	algorithm: Option<&str>,
	message: Option<&str>,
	writer: &mut W,
) -> Result<(), Box<dyn Error>> {
	let token = match algorithm {
		Some(token) if !token.trim().is_empty() => token,
		_ => {
			return Err(Box::new(DigestError::MissingAlgorithm))
		}
	};
	let message = match message {
		Some(message) => message,
		None => {
			return Err(Box::new(DigestError::MissingMessage))
		}
	};
	let selector = AlgorithmSelector::resolve(token)
		.ok_or_else(|| DigestError::UnsupportedAlgorithm {
			name: token.to_string(),
		})?;
	let results = DigestRunner::compute_digests(
		selector,
		message.as_bytes(),
	)?;
	let mode = match selector {
		AlgorithmSelector::All => RenderMode::Labeled,
		AlgorithmSelector::Single(_) => RenderMode::Bare,
	};
	let lines = render_lines(&results, mode);
	emit_lines(writer, &lines)?;
	Ok(())
}

/// Print the supported algorithm registry, one entry per line.
pub fn list_algorithms<W: Write>(
	writer: &mut W,
) -> Result<(), Box<dyn Error>> {
	for entry in AlgorithmMatrix::entries() {
		writeln!(
			writer,
			"{:<12} {:>2} bytes  {}",
			entry.name, entry.digest_len, entry.description
		)?;
	}
	Ok(())
}
