// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: runner
// Purpose: Stateless digest computation over in-memory messages with
//          boxed dynamic dispatch per algorithm.
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::dgst::algorithm::{AlgorithmSelector, DigestAlgorithm};
use crate::dgst::output::DigestResult;
use digest::{Digest, DynDigest};
use std::fmt;
use strum::IntoEnumIterator;

/// Error type for digest argument validation failures.
#[derive(Debug)]
pub enum DigestError {
	MissingAlgorithm,
	MissingMessage,
	EmptyMessage,
	UnsupportedAlgorithm { name: String },
}

impl fmt::Display for DigestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingAlgorithm => {
				write!(f, "no digest algorithm was provided")
			}
			Self::MissingMessage => {
				write!(f, "no message was provided")
			}
			Self::EmptyMessage => {
				write!(f, "message must not be empty")
			}
			Self::UnsupportedAlgorithm { name } => write!(
				f,
				"unsupported digest algorithm {}",
				name
			),
		}
	}
}

impl std::error::Error for DigestError {}

fn create_hasher(
	algorithm: DigestAlgorithm,
) -> Box<dyn DynDigest> {
	match algorithm {
		DigestAlgorithm::Md2 => Box::new(md2::Md2::new()),
		DigestAlgorithm::Md5 => Box::new(md5::Md5::new()),
		DigestAlgorithm::Sha1 => Box::new(sha1::Sha1::new()),
		DigestAlgorithm::Sha224 => {
			Box::new(sha2::Sha224::new())
		}
		DigestAlgorithm::Sha256 => {
			Box::new(sha2::Sha256::new())
		}
		DigestAlgorithm::Sha384 => {
			Box::new(sha2::Sha384::new())
		}
		DigestAlgorithm::Sha512 => {
			Box::new(sha2::Sha512::new())
		}
		DigestAlgorithm::Sha512_224 => {
			Box::new(sha2::Sha512_224::new())
		}
		DigestAlgorithm::Sha512_256 => {
			Box::new(sha2::Sha512_256::new())
		}
	}
}

/// Stateless digest computation facade.
pub struct DigestRunner;

impl DigestRunner {
	/// Compute the digests selected by `selector` over `message`.
	///
	/// The ALL selector yields one result per supported algorithm
	/// in the registry's declaration order; a single algorithm
	/// yields exactly one result. Validation failures occur before
	/// any result is produced.
	pub fn compute_digests(
		selector: AlgorithmSelector,
		message: &[u8],
	) -> Result<Vec<DigestResult>, DigestError> {
		if message.is_empty() {
			return Err(DigestError::EmptyMessage);
		}
		let results = match selector {
			AlgorithmSelector::Single(algorithm) => {
				vec![Self::digest_message(algorithm, message)]
			}
			AlgorithmSelector::All => DigestAlgorithm::iter()
				.map(|algorithm| {
					Self::digest_message(algorithm, message)
				})
				.collect(),
		};
		Ok(results)
	}

	fn digest_message(
		algorithm: DigestAlgorithm,
		message: &[u8],
	) -> DigestResult {
		let mut hasher = create_hasher(algorithm);
		hasher.update(message);
		DigestResult::from_digest(
			algorithm,
			&hasher.finalize_reset(),
		)
	}
}
