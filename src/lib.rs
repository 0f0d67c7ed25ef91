// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod dgst {
	pub mod algorithm;
	pub mod app;
	pub mod commands;
	pub mod decode;
	pub mod output;
	pub mod runner;
}
