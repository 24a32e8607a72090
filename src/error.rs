//! Errores del pipeline

use thiserror::Error;

/// Errores de precondición del pipeline.
///
/// Ninguno es recuperable: indican secuencias mal alineadas o palabras
/// degeneradas que invalidan los índices posicionales del resto de etapas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Las secuencias de trabajo y de referencia deben tener la misma longitud
    /// en todas las etapas.
    #[error(
        "secuencias desalineadas: {working} palabras frente a {reference} de referencia"
    )]
    LengthMismatch { working: usize, reference: usize },

    /// Una palabra vacía no admite modificaciones (la guarda de borrado
    /// asume longitud >= 1).
    #[error("palabra vacía en la posición {position}")]
    EmptyWord { position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mensajes_de_error() {
        let error = PipelineError::LengthMismatch {
            working: 3,
            reference: 5,
        };
        assert_eq!(
            error.to_string(),
            "secuencias desalineadas: 3 palabras frente a 5 de referencia"
        );

        let error = PipelineError::EmptyWord { position: 7 };
        assert_eq!(error.to_string(), "palabra vacía en la posición 7");
    }
}
