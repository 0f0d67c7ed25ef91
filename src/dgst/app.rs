// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: digestkit
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::dgst::commands;
use crate::dgst::runner::DigestError;
use clap::{Arg, ArgAction};
use clap_complete::{generate, Generator, Shell};
use colored::*;
use std::error::Error;
use std::io;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Typical invocations:
  dgst SHA-256 'sample message'   Hash with one algorithm
  dgst ALL 'sample message'       Hash with every algorithm
{usage-heading} {usage}

{all-args}{after-help}
";

fn build_cli() -> clap::Command {
	clap::Command::new(clap::crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("dgst")
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Compute message digests from the command line")
		.args_conflicts_with_subcommands(true)
		.arg(
			Arg::new("ALGORITHM")
				.help("Digest algorithm name, or ALL for every supported one")
				.required(false),
		)
		.arg(
			Arg::new("MESSAGE")
				.help("Message to digest")
				.required(false),
		)
		.arg(
			Arg::new("list")
				.short('l')
				.long("list")
				.help("List supported digest algorithms")
				.action(ArgAction::SetTrue),
		)
		.subcommand(
			clap::command!("generate-auto-completions")
				.about("Generate shell completions")
				.arg(
					Arg::new("SHELL")
						.required(true)
						.value_parser(clap::value_parser!(Shell))
						.help("Shell to generate completions for"),
				),
		)
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let matches = build_cli().get_matches();

	if let Some(("generate-auto-completions", s)) =
		matches.subcommand()
	{
		if let Some(shell) = s.get_one::<Shell>("SHELL") {
			let mut capp = build_cli();
			print_completions(*shell, &mut capp);
		}
		return Ok(());
	}

	if matches.get_flag("list") {
		let stdout = io::stdout();
		commands::list_algorithms(&mut stdout.lock())?;
		return Ok(());
	}

	let algorithm = matches
		.get_one::<String>("ALGORITHM")
		.map(String::as_str);
	let message = matches
		.get_one::<String>("MESSAGE")
		.map(String::as_str);

	let stdout = io::stdout();
	if let Err(err) = commands::digest_message(
		algorithm,
		message,
		&mut stdout.lock(),
	) {
		report_failure(err);
	}
	Ok(())
}

fn report_failure(err: Box<dyn Error>) -> ! {
	eprintln!("{}", format!("error: {}", err).red());
	let code = if err.is::<DigestError>() { 1 } else { 2 };
	std::process::exit(code);
}

fn print_completions<G: Generator>(
	generator: G,
	cmd: &mut clap::Command,
) {
	generate(
		generator,
		cmd,
		cmd.get_name().to_string(),
		&mut std::io::stdout(),
	);
}
