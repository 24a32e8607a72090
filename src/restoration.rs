//! Restauración por vecino más cercano

use crate::error::PipelineError;
use crate::spelling::levenshtein_distance;

/// Restaura una secuencia corrupta contra su secuencia de referencia
///
/// Cada palabra que difiere de su contraparte se sustituye por la palabra
/// de referencia a menor distancia de Levenshtein, recorriendo toda la
/// secuencia de referencia. Ante un empate gana el primer mínimo en orden
/// de recorrido, y una coincidencia exacta (distancia 0) corta la búsqueda.
///
/// La palabra elegida es el candidato hallado por la búsqueda, no la
/// palabra de referencia en la posición original.
pub fn restore_sequence(
    words: &mut [String],
    reference: &[String],
) -> Result<(), PipelineError> {
    if words.len() != reference.len() {
        return Err(PipelineError::LengthMismatch {
            working: words.len(),
            reference: reference.len(),
        });
    }

    for i in 0..words.len() {
        // Idéntica a la referencia: nunca fue tocada, o la corrupción
        // reprodujo el original por casualidad.
        if words[i] == reference[i] {
            continue;
        }

        if let Some(replacement) = nearest_match(&words[i], reference) {
            words[i] = replacement.to_string();
        }
    }

    Ok(())
}

/// Busca la palabra de referencia a menor distancia de edición
fn nearest_match<'a>(word: &str, reference: &'a [String]) -> Option<&'a str> {
    let mut min_distance = usize::MAX;
    let mut nearest = None;

    for candidate in reference {
        let distance = levenshtein_distance(word, candidate);

        if distance < min_distance {
            min_distance = distance;
            nearest = Some(candidate.as_str());
        }

        // Una coincidencia exacta no puede ser superada
        if distance == 0 {
            break;
        }
    }

    nearest
}
