use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a corpus file and returns its full contents as a `String`.
///
/// - Reads the entire file into memory
/// - Keeps whitespace and punctuation: every character is part of the
///   model's alphabet, so nothing is split or trimmed
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn read_corpus_keeps_whitespace() {
		let path = std::env::temp_dir().join("char_gen_io_test.txt");
		let mut file = File::create(&path).unwrap();
		file.write_all(b"ab cd\nef").unwrap();

		let contents = read_corpus(&path).unwrap();
		assert_eq!(contents, "ab cd\nef");

		std::fs::remove_file(&path).unwrap();
	}

	#[test]
	fn read_corpus_missing_file_is_an_error() {
		let path = std::env::temp_dir().join("char_gen_io_does_not_exist.txt");
		assert!(read_corpus(&path).is_err());
	}
}
