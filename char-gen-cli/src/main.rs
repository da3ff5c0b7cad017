use std::env;

use char_gen_core::model::language_model::LanguageModel;

/// Seed used in deterministic mode, handy for reproducing a generation.
const DEBUG_SEED: u64 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 5 {
        return Err("usage: char-gen-cli <window length> <initial text> <text length> <random|fixed> <corpus file>".into());
    }

    // Malformed numbers fail here, at the boundary, never inside the model
    let window_length: usize = args[0]
        .parse()
        .map_err(|_| format!("window length must be a positive integer, got '{}'", args[0]))?;
    let initial_text = &args[1];
    let text_length: usize = args[2]
        .parse()
        .map_err(|_| format!("text length must be a non-negative integer, got '{}'", args[2]))?;
    let random_generation = args[3] == "random";
    let corpus_path = &args[4];

    // 'random' mode seeds from the OS: different runs, different texts.
    // Any other flag fixes the seed so runs are reproducible.
    let mut model = if random_generation {
        LanguageModel::new(window_length)?
    } else {
        LanguageModel::with_seed(window_length, DEBUG_SEED)?
    };

    // Trains the model, creating the window table
    model.train_file(corpus_path)?;
    log::info!("trained on {} with window length {}", corpus_path, window_length);

    // Generates text, and prints it
    println!("{}", model.generate(initial_text, text_length));

    Ok(())
}
