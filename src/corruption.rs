//! Generador de erratas aleatorias

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PipelineError;

/// Generador de erratas
///
/// Selecciona cada palabra de la secuencia de forma independiente con
/// probabilidad 1/5 y le aplica entre 1 y 3 modificaciones encadenadas:
/// sustitución, eliminación o inserción de una letra minúscula aleatoria.
pub struct Corruptor<R: Rng> {
    rng: R,
}

impl Corruptor<StdRng> {
    /// Crea un corruptor con entropía del sistema
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Crea un corruptor reproducible a partir de una semilla
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Corruptor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Corruptor<R> {
    /// Crea un corruptor sobre un generador arbitrario
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Introduce erratas en un subconjunto aleatorio de la secuencia
    ///
    /// Las palabras no seleccionadas quedan intactas byte a byte.
    /// Una palabra vacía es un error: la guarda de eliminación asume
    /// longitud mínima 1.
    pub fn corrupt_sequence(&mut self, words: &mut [String]) -> Result<(), PipelineError> {
        for (position, word) in words.iter_mut().enumerate() {
            if word.is_empty() {
                return Err(PipelineError::EmptyWord { position });
            }

            // selección del 20% de las palabras
            if self.rng.gen_range(0..5) == 0 {
                self.corrupt_word(word);
            }
        }

        Ok(())
    }

    /// Aplica entre 1 y 3 modificaciones encadenadas a una palabra
    fn corrupt_word(&mut self, word: &mut String) {
        let mut chars: Vec<char> = word.chars().collect();

        // número de modificaciones (de 1 a 3)
        let modifications = self.rng.gen_range(1..=3);
        let mut applied = 0;

        while applied < modifications {
            // Los índices se sortean sobre la longitud actual: las
            // modificaciones previas pueden haberla cambiado.
            match self.rng.gen_range(0..3) {
                // sustitución de una letra
                0 => {
                    let index = self.rng.gen_range(0..chars.len());
                    chars[index] = self.random_letter();
                }
                // eliminación de una letra
                1 => {
                    // no eliminar la última letra: sortear otra modificación
                    // sin consumir esta iteración
                    if chars.len() == 1 {
                        continue;
                    }
                    let index = self.rng.gen_range(0..chars.len());
                    chars.remove(index);
                }
                // inserción de una letra
                _ => {
                    // sorteo adicional: antes o después del índice
                    let mut index = self.rng.gen_range(0..chars.len());
                    index += self.rng.gen_range(0..2);
                    chars.insert(index, self.random_letter());
                }
            }

            applied += 1;
        }

        *word = chars.into_iter().collect();
    }

    fn random_letter(&mut self) -> char {
        char::from(b'a' + self.rng.gen_range(0..26))
    }
}
