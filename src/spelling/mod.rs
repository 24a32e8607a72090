//! Módulo de distancia de edición
//!
//! Función pura consumida por la restauración para ordenar candidatos.

pub mod levenshtein;

pub use levenshtein::levenshtein_distance;
