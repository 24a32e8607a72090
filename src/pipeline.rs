//! Motor del pipeline de simulación

use rand::rngs::StdRng;

use crate::config::Config;
use crate::corruption::Corruptor;
use crate::error::PipelineError;
use crate::report::{find_mistakes, Mistake};
use crate::restoration::restore_sequence;
use crate::tokenizer::Tokenizer;

/// Resultado de una ejecución completa del pipeline
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Secuencia original, intacta
    pub original: Vec<String>,
    /// Secuencia tras introducir erratas
    pub corrupted: Vec<String>,
    /// Secuencia tras la restauración
    pub restored: Vec<String>,
    /// Posiciones que la restauración no reprodujo exactamente
    pub mistakes: Vec<Mistake>,
}

/// Motor del pipeline: tokeniza, corrompe, restaura e informa
pub struct Pipeline {
    tokenizer: Tokenizer,
    corruptor: Corruptor<StdRng>,
}

impl Pipeline {
    /// Crea el pipeline según la configuración
    pub fn new(config: &Config) -> Self {
        let corruptor = match config.seed {
            Some(seed) => Corruptor::with_seed(seed),
            None => Corruptor::new(),
        };

        Self {
            tokenizer: Tokenizer::new(),
            corruptor,
        }
    }

    /// Crea un pipeline reproducible con semilla fija
    pub fn with_seed(seed: u64) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            corruptor: Corruptor::with_seed(seed),
        }
    }

    /// Ejecuta el pipeline completo sobre un texto
    ///
    /// La secuencia de trabajo pasa por valor de etapa en etapa; las
    /// instantáneas original y corrupta son copias explícitas, de modo que
    /// ninguna etapa observa el búfer de otra.
    pub fn run(&mut self, text: &str) -> Result<PipelineResult, PipelineError> {
        let original = self.tokenizer.extract_words(text);

        let mut words = original.clone();
        self.corruptor.corrupt_sequence(&mut words)?;
        let corrupted = words.clone();

        restore_sequence(&mut words, &original)?;
        let mistakes = find_mistakes(&words, &original)?;

        Ok(PipelineResult {
            original,
            corrupted,
            restored: words,
            mistakes,
        })
    }
}
