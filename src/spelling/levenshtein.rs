//! Algoritmo de distancia de Levenshtein

/// Calcula la distancia de Levenshtein entre dos cadenas
///
/// La distancia de Levenshtein es el número mínimo de operaciones
/// (inserción, eliminación, sustitución) necesarias para transformar
/// una cadena en otra.
///
/// Opera sobre puntos de código Unicode, de modo que un carácter
/// acentuado cuenta como una sola posición.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let mut a_chars: Vec<char> = a.chars().collect();
    let mut b_chars: Vec<char> = b.chars().collect();

    // Casos base
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // La cadena más corta ocupa la dimensión de fila: memoria O(min(n, m)).
    // El resultado no cambia al intercambiar los argumentos.
    if b_chars.len() > a_chars.len() {
        std::mem::swap(&mut a_chars, &mut b_chars);
    }

    // Optimización: usar solo dos filas en lugar de matriz completa.
    // Cada celda depende de la superior, la izquierda y la diagonal.
    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        curr_row[0] = i;

        for j in 1..=b_chars.len() {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // eliminación
                .min(curr_row[j - 1] + 1) // inserción
                .min(prev_row[j - 1] + cost); // sustitución
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein_distance("hola", "hola"), 0);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
    }

    #[test]
    fn test_levenshtein_single_edit() {
        assert_eq!(levenshtein_distance("casa", "caza"), 1); // sustitución
        assert_eq!(levenshtein_distance("casa", "casas"), 1); // inserción
        assert_eq!(levenshtein_distance("casas", "casa"), 1); // eliminación
    }

    #[test]
    fn test_levenshtein_multiple_edits() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        let pairs = [("kitten", "sitting"), ("flaw", "lawn"), ("", "casa")];
        for (a, b) in pairs {
            assert_eq!(
                levenshtein_distance(a, b),
                levenshtein_distance(b, a),
                "La distancia debe ser simétrica para '{}' y '{}'",
                a,
                b
            );
        }
    }

    #[test]
    fn test_levenshtein_sin_alineamiento() {
        // Sin caracteres en común la distancia es la longitud mayor
        assert_eq!(levenshtein_distance("abc", "xyz"), 3);
        assert_eq!(levenshtein_distance("ab", "wxyz"), 4);
    }

    #[test]
    fn test_levenshtein_acentos() {
        // Los acentos cuentan como una única sustitución, no como bytes
        assert_eq!(levenshtein_distance("camión", "camion"), 1);
        assert_eq!(levenshtein_distance("árbol", "árbol"), 0);
    }

    #[test]
    fn test_levenshtein_desigualdad_triangular() {
        let triples = [
            ("casa", "caza", "taza"),
            ("kitten", "sitting", "fitting"),
            ("", "ab", "abcd"),
        ];
        for (a, b, c) in triples {
            assert!(
                levenshtein_distance(a, c)
                    <= levenshtein_distance(a, b) + levenshtein_distance(b, c),
                "Desigualdad triangular violada para '{}', '{}', '{}'",
                a,
                b,
                c
            );
        }
    }
}
