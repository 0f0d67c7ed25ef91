// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// Module: algorithm registry
// Purpose: Map CLI algorithm identifiers to digest metadata and fix the
//          emission order used by the ALL selector.
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use std::fmt;
use strum::EnumIter;

/// Sentinel token selecting every supported algorithm at once.
pub const ALL_TOKEN: &str = "ALL";

/// Digest algorithms supported by the runner.
///
/// Declaration order is load-bearing: the ALL selector emits one
/// result per variant in exactly this order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter)]
pub enum DigestAlgorithm {
	Md2,
	Md5,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Sha512_224,
	Sha512_256,
}

impl DigestAlgorithm {
	/// Canonical display name, e.g. `SHA-512/224`.
	pub fn canonical_name(self) -> &'static str {
		self.entry().name
	}

	/// Fixed digest size in bytes.
	pub fn digest_len(self) -> usize {
		self.entry().digest_len
	}

	fn entry(self) -> &'static AlgorithmEntry {
		AlgorithmMatrix::entries()
			.iter()
			.find(|entry| entry.algorithm == self)
			.expect("every variant has a registry entry")
	}
}

impl fmt::Display for DigestAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.canonical_name())
	}
}

/// Selects either one supported algorithm or all of them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlgorithmSelector {
	All,
	Single(DigestAlgorithm),
}

impl AlgorithmSelector {
	/// Resolve a raw selector token. Matching is ASCII
	/// case-insensitive; `None` means the name is outside the
	/// supported set.
	pub fn resolve(token: &str) -> Option<Self> {
		if token.trim().eq_ignore_ascii_case(ALL_TOKEN) {
			return Some(Self::All);
		}
		AlgorithmMatrix::lookup(token)
			.map(|entry| Self::Single(entry.algorithm))
	}
}

/// Declarative mapping between algorithm identifiers and digest
/// metadata.
pub struct AlgorithmMatrix;

impl AlgorithmMatrix {
	pub const fn entries() -> &'static [AlgorithmEntry] {
		ENTRIES
	}

	pub fn lookup(token: &str) -> Option<&'static AlgorithmEntry> {
		let normalized = token.trim().to_ascii_lowercase();
		Self::entries().iter().find(|entry| {
			entry.name.eq_ignore_ascii_case(&normalized)
				|| entry.aliases.contains(&normalized.as_str())
		})
	}
}

/// Single registry entry.
#[derive(Clone, Copy, Debug)]
pub struct AlgorithmEntry {
	pub algorithm: DigestAlgorithm,
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub digest_len: usize,
	pub description: &'static str,
}

const ENTRIES: &[AlgorithmEntry] = &[
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Md2,
		name: "MD2",
		aliases: &[],
		digest_len: 16,
		description: "MD2 message digest (RFC 1319)",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Md5,
		name: "MD5",
		aliases: &[],
		digest_len: 16,
		description: "MD5 message digest (RFC 1321)",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Sha1,
		name: "SHA-1",
		aliases: &["sha1"],
		digest_len: 20,
		description: "SHA-1 (FIPS 180-4)",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Sha224,
		name: "SHA-224",
		aliases: &["sha224"],
		digest_len: 28,
		description: "SHA-2 family, 224-bit digest",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Sha256,
		name: "SHA-256",
		aliases: &["sha256"],
		digest_len: 32,
		description: "SHA-2 family, 256-bit digest",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Sha384,
		name: "SHA-384",
		aliases: &["sha384"],
		digest_len: 48,
		description: "SHA-2 family, 384-bit digest",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Sha512,
		name: "SHA-512",
		aliases: &["sha512"],
		digest_len: 64,
		description: "SHA-2 family, 512-bit digest",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Sha512_224,
		name: "SHA-512/224",
		aliases: &["sha512/224", "sha512-224"],
		digest_len: 28,
		description: "SHA-512 truncated to 224 bits",
	},
	AlgorithmEntry {
		algorithm: DigestAlgorithm::Sha512_256,
		name: "SHA-512/256",
		aliases: &["sha512/256", "sha512-256"],
		digest_len: 32,
		description: "SHA-512 truncated to 256 bits",
	},
];
