//! Informe de restauraciones fallidas

use crate::error::PipelineError;

/// Par (palabra observada, palabra original) de una posición mal restaurada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
    pub found: String,
    pub original: String,
}

/// Compara la secuencia restaurada con la referencia posición a posición
///
/// Devuelve, en orden, un registro por cada posición cuya palabra no
/// coincide exactamente con la original. El número de fallos es la
/// longitud de la lista.
pub fn find_mistakes(
    words: &[String],
    reference: &[String],
) -> Result<Vec<Mistake>, PipelineError> {
    if words.len() != reference.len() {
        return Err(PipelineError::LengthMismatch {
            working: words.len(),
            reference: reference.len(),
        });
    }

    let mistakes = words
        .iter()
        .zip(reference)
        .filter(|(found, original)| found != original)
        .map(|(found, original)| Mistake {
            found: found.clone(),
            original: original.clone(),
        })
        .collect();

    Ok(mistakes)
}
