use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::distribution::Distribution;
use crate::io::read_corpus;

/// A character-level n-gram language model.
///
/// The model maps every fixed-length window of consecutive characters seen
/// in the corpus to the distribution of characters observed right after it,
/// then generates text by sampling from the distribution of the trailing
/// window of the text generated so far.
///
/// # Responsibilities
/// - Build the window table from a sequential character stream
/// - Finalize per-window probabilities once the stream is exhausted
/// - Generate text of a requested length from an initial text
///
/// # Invariants
/// - `window_length` is always >= 1 and fixed at construction
/// - Every key in `windows` is exactly `window_length` characters long
/// - The table is mutated only by `train`; generation never writes to it
///
/// # Notes
/// - A model is trained exactly once. Training an already-trained model is
///   a precondition violation: counts would accumulate on top of finalized
///   probabilities and the result is unspecified.
/// - The random generator lives inside the model, so `generate` takes
///   `&mut self`; sharing a model across threads during generation would
///   require external synchronization.
#[derive(Debug)]
pub struct LanguageModel {
	/// Length of the conditioning window, in characters.
	window_length: usize,

	/// Per-model random generator, seeded or unseeded at construction.
	rng: StdRng,

	/// Mapping from a window to its observed character distribution.
	windows: HashMap<String, Distribution>,
}

impl LanguageModel {
	/// Creates an unseeded model of the given window length.
	///
	/// Generating texts from this model multiple times will produce
	/// different random texts.
	///
	/// # Errors
	/// Returns an error if `window_length < 1`.
	pub fn new(window_length: usize) -> Result<Self, String> {
		if window_length < 1 {
			return Err("window length must be >= 1".to_owned());
		}
		Ok(Self {
			window_length,
			rng: StdRng::from_os_rng(),
			windows: HashMap::new(),
		})
	}

	/// Creates a model of the given window length with a fixed seed.
	///
	/// Generating texts from this model multiple times with the same seed
	/// value will produce the same random texts. Good for debugging.
	///
	/// # Errors
	/// Returns an error if `window_length < 1`.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, String> {
		if window_length < 1 {
			return Err("window length must be >= 1".to_owned());
		}
		Ok(Self {
			window_length,
			rng: StdRng::seed_from_u64(seed),
			windows: HashMap::new(),
		})
	}

	/// Returns the window length fixed at construction.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Trains the model on a sequential character stream (the corpus).
	///
	/// # Behavior
	/// - Fills a sliding buffer with the first `window_length` characters.
	///   A corpus shorter than that leaves the table empty; not an error.
	/// - For each remaining character, updates the distribution of the
	///   current buffer (created lazily on first occurrence) and slides the
	///   buffer by one character.
	/// - Finalizes probabilities for every distribution once the stream is
	///   exhausted.
	///
	/// # Notes
	/// - UTF-8 safe: the buffer slides by characters, not bytes.
	/// - The final `window_length`-character suffix of the corpus is never
	///   used as a key; nothing follows it.
	pub fn train(&mut self, chars: impl IntoIterator<Item = char>) {
		let mut chars = chars.into_iter();

		let mut window = String::new();
		let mut window_chars = 0;
		while window_chars < self.window_length {
			match chars.next() {
				Some(chr) => {
					window.push(chr);
					window_chars += 1;
				}
				// Corpus shorter than the window, the table stays empty
				None => return,
			}
		}

		for chr in chars {
			let distribution = self
				.windows
				.entry(window.clone())
				.or_insert_with(|| Distribution::new(&window));
			distribution.update(chr);

			window.push(chr);
			window.remove(0);
		}

		for distribution in self.windows.values_mut() {
			distribution.finalize();
		}

		debug!(
			"trained {} windows of length {}",
			self.windows.len(),
			self.window_length
		);
	}

	/// Trains the model on the contents of a corpus file.
	///
	/// # Errors
	/// Returns an error if the file cannot be opened or read.
	pub fn train_file<P: AsRef<Path>>(&mut self, filepath: P) -> io::Result<()> {
		let corpus = read_corpus(filepath)?;
		self.train(corpus.chars());
		Ok(())
	}

	/// Generates text based on the probabilities learned during training.
	///
	/// # Parameters
	/// - `initial_text`: text to start from. If it is shorter than the
	///   window length, it is returned unchanged (no valid window can be
	///   formed).
	/// - `text_length`: target total length of the result, in characters.
	///
	/// # Behavior
	/// - While the text is shorter than `text_length`, looks up the
	///   distribution of the trailing `window_length` characters, samples
	///   one character from it and appends it.
	/// - Stops early if the trailing window was never observed during
	///   training; the text accumulated so far is returned. This is a
	///   normal stopping condition, not an error.
	pub fn generate(&mut self, initial_text: &str, text_length: usize) -> String {
		if initial_text.chars().count() < self.window_length {
			return initial_text.to_owned();
		}

		let mut text = initial_text.to_owned();
		let mut text_chars = text.chars().count();
		while text_chars < text_length {
			let window = last_n_chars(&text, self.window_length);
			let Some(distribution) = self.windows.get(&window) else {
				debug!("window {:?} never observed, stopping at {} characters", window, text_chars);
				return text;
			};

			let r = self.rng.random::<f64>();
			match distribution.sample(r) {
				Some(chr) => {
					text.push(chr);
					text_chars += 1;
				}
				// Empty distributions are never stored, kept for safety
				None => return text,
			}
		}
		text
	}
}

impl fmt::Display for LanguageModel {
	/// Renders every window and its distribution, one per line.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, distribution) in &self.windows {
			writeln!(f, "{} : {}", window, distribution)?;
		}
		Ok(())
	}
}

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire
/// string is returned. Handles UTF-8 correctly (multibyte characters).
fn last_n_chars(s: &str, n: usize) -> String {
	if n > s.chars().count() {
		return s.to_owned();
	}
	s.chars()
		.rev()
		.take(n)
		.collect::<Vec<_>>()
		.into_iter()
		.rev()
		.collect()
}
