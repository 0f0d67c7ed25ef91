// SPDX-License-Identifier: MIT OR Apache-2.0
use assert_cmd::Command;

const SAMPLE: &str = "sample message";

#[allow(deprecated)]
fn dgst() -> Command {
	Command::cargo_bin("dgst").expect("binary dgst available")
}

#[test]
fn cli_single_algorithm_prints_bare_digest() {
	let assert = dgst().args(["MD5", SAMPLE]).assert().success();
	assert_eq!(
		assert.get_output().stdout,
		b"362962f26d8763682a1de8ec4a276698\r\n"
	);
}

#[test]
fn cli_all_prints_labeled_block_in_fixed_order() {
	let assert = dgst().args(["ALL", SAMPLE]).assert().success();
	let expected = "MD2 fecf1d3bd300e5018b89148cd77497a6\r\n\
		MD5 362962f26d8763682a1de8ec4a276698\r\n\
		SHA-1 7e5ee118ece79e5a2d22711a5bd0f30d617b4321\r\n\
		SHA-224 715ef9177f02bc834b85cadc806aae13f2239e3cf0f861505976272a\r\n\
		SHA-256 59162c6b059f619b0538f592de24e163061316572869ffc9a2648315dbe75997\r\n\
		SHA-384 c72206d84e4f211fb90fe4d9b58dd7339d6b321de4e52906d9f9af3b5808603f580ef45e774cd9dc3e84395ee005ebad\r\n\
		SHA-512 dff9a77b195fec431d0c54c11b8d492dfca47ed11a472c2e7452fb432b76988651cfd5d8d428df70552aa6d57c5d6c9ea39ed5bb528462bfb787d4c1618f6e2d\r\n\
		SHA-512/224 644e8daf1d38041b875729759b750a8b347af5c2590f67d141ba6a2f\r\n\
		SHA-512/256 bf92fa34836193d0c46500b2223caff74503b5f33314178f8437b08c4084210c\r\n";
	assert_eq!(
		assert.get_output().stdout,
		expected.as_bytes()
	);
}

#[test]
fn cli_algorithm_names_are_case_insensitive() {
	let assert =
		dgst().args(["sha-256", SAMPLE]).assert().success();
	assert_eq!(
		assert.get_output().stdout,
		b"59162c6b059f619b0538f592de24e163061316572869ffc9a2648315dbe75997\r\n"
	);
}

#[test]
fn cli_without_arguments_fails() {
	let assert = dgst().assert().failure().code(1);
	let stderr = String::from_utf8(
		assert.get_output().stderr.clone(),
	)
	.expect("stderr should be UTF-8");
	assert!(stderr.contains("no digest algorithm was provided"));
}

#[test]
fn cli_without_message_fails() {
	let assert = dgst().arg("MD5").assert().failure().code(1);
	let stderr = String::from_utf8(
		assert.get_output().stderr.clone(),
	)
	.expect("stderr should be UTF-8");
	assert!(stderr.contains("no message was provided"));
}

#[test]
fn cli_empty_message_fails() {
	let assert =
		dgst().args(["MD5", ""]).assert().failure().code(1);
	let stderr = String::from_utf8(
		assert.get_output().stderr.clone(),
	)
	.expect("stderr should be UTF-8");
	assert!(stderr.contains("message must not be empty"));
}

#[test]
fn cli_unknown_algorithm_fails() {
	let assert = dgst()
		.args(["NonExistentDigest", SAMPLE])
		.assert()
		.failure()
		.code(1);
	let stderr = String::from_utf8(
		assert.get_output().stderr.clone(),
	)
	.expect("stderr should be UTF-8");
	assert!(stderr
		.contains("unsupported digest algorithm NonExistentDigest"));
}

#[test]
fn cli_failure_produces_no_stdout() {
	let assert = dgst()
		.args(["NonExistentDigest", SAMPLE])
		.assert()
		.failure();
	assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn cli_list_names_every_algorithm() {
	let assert = dgst().arg("--list").assert().success();
	let stdout = String::from_utf8(
		assert.get_output().stdout.clone(),
	)
	.expect("stdout should be UTF-8");
	for name in [
		"MD2",
		"MD5",
		"SHA-1",
		"SHA-224",
		"SHA-256",
		"SHA-384",
		"SHA-512",
		"SHA-512/224",
		"SHA-512/256",
	] {
		assert!(
			stdout.contains(name),
			"missing {} in:\n{}",
			name,
			stdout
		);
	}
}
