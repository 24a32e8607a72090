use std::fs;
use std::process;

use erratas::{Config, Pipeline};

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    let input_file = match config.input_file {
        Some(ref input_file) => input_file.clone(),
        None => {
            eprintln!("Error: No se proporcionó archivo de entrada.");
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    let text = match fs::read_to_string(&input_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error leyendo archivo '{}': {}", input_file, e);
            process::exit(1);
        }
    };

    let mut pipeline = Pipeline::new(&config);
    let result = match pipeline.run(&text) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error ejecutando el pipeline: {}", e);
            process::exit(1);
        }
    };

    write_words(&config.dictionary_file, &result.original);
    write_words(&config.corrupted_file, &result.corrupted);
    write_words(&config.restored_file, &result.restored);

    println!("Errores encontrados: {}", result.mistakes.len());
    for mistake in &result.mistakes {
        println!(
            "{} [ENCONTRADA] <> {} [ORIGINAL]",
            mistake.found, mistake.original
        );
    }
}

/// Escribe una palabra por línea
fn write_words(path: &str, words: &[String]) {
    let mut content = words.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }

    if let Err(e) = fs::write(path, content) {
        eprintln!("Error escribiendo archivo '{}': {}", path, e);
        process::exit(1);
    }
}
