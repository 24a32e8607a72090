//! Configuración y argumentos CLI

#[derive(Debug, Clone)]
pub struct Config {
    /// Archivo de entrada
    pub input_file: Option<String>,
    /// Archivo con la lista de palabras originales (default: "palabras.txt")
    pub dictionary_file: String,
    /// Archivo con la secuencia corrupta (default: "con_erratas.txt")
    pub corrupted_file: String,
    /// Archivo con la secuencia restaurada (default: "corregido.txt")
    pub restored_file: String,
    /// Semilla del generador aleatorio
    pub seed: Option<u64>,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: None,
            dictionary_file: "palabras.txt".to_string(),
            corrupted_file: "con_erratas.txt".to_string(),
            restored_file: "corregido.txt".to_string(),
            seed: None,
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-i" | "--input" => {
                    config.input_file = Some(args_iter.next().ok_or("--input requiere un valor")?);
                }
                "-d" | "--dictionary" => {
                    config.dictionary_file =
                        args_iter.next().ok_or("--dictionary requiere un valor")?;
                }
                "-c" | "--corrupted" => {
                    config.corrupted_file =
                        args_iter.next().ok_or("--corrupted requiere un valor")?;
                }
                "-r" | "--restored" => {
                    config.restored_file =
                        args_iter.next().ok_or("--restored requiere un valor")?;
                }
                "--seed" => {
                    let value = args_iter.next().ok_or("--seed requiere un valor")?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| format!("Semilla no válida: {}", value))?;
                    config.seed = Some(seed);
                }
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("Opción desconocida: {}", arg));
                    }
                    // Argumento posicional = archivo de entrada
                    config.input_file = Some(arg);
                }
            }
        }

        Ok(config)
    }

    pub fn print_help() {
        println!(
            r#"Erratas - Simulador de erratas y restauración por distancia de Levenshtein

USO:
    erratas [OPCIONES] [ARCHIVO]

ARGUMENTOS:
    [ARCHIVO]    Archivo de texto de entrada

OPCIONES:
    -h, --help                Muestra esta ayuda
    -i, --input <ARCHIVO>     Archivo de entrada
    -d, --dictionary <ARCHIVO> Salida con las palabras originales (default: palabras.txt)
    -c, --corrupted <ARCHIVO> Salida con las erratas (default: con_erratas.txt)
    -r, --restored <ARCHIVO>  Salida restaurada (default: corregido.txt)
    --seed <N>                Semilla del generador aleatorio

EJEMPLOS:
    erratas ejemplo.txt
    erratas --seed 42 --input ejemplo.txt
    erratas -c erratas.txt -r arreglado.txt ejemplo.txt"#
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(valores: &[&str]) -> Vec<String> {
        std::iter::once("erratas")
            .chain(valores.iter().copied())
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_valores_por_defecto() {
        let config = Config::from_args(args(&[])).unwrap();

        assert_eq!(config.input_file, None);
        assert_eq!(config.dictionary_file, "palabras.txt");
        assert_eq!(config.corrupted_file, "con_erratas.txt");
        assert_eq!(config.restored_file, "corregido.txt");
        assert_eq!(config.seed, None);
        assert!(!config.show_help);
    }

    #[test]
    fn test_argumento_posicional_es_entrada() {
        let config = Config::from_args(args(&["ejemplo.txt"])).unwrap();
        assert_eq!(config.input_file, Some("ejemplo.txt".to_string()));
    }

    #[test]
    fn test_semilla() {
        let config = Config::from_args(args(&["--seed", "42", "ejemplo.txt"])).unwrap();
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_semilla_no_valida() {
        let resultado = Config::from_args(args(&["--seed", "cuarenta"]));
        assert_eq!(resultado.unwrap_err(), "Semilla no válida: cuarenta");
    }

    #[test]
    fn test_opcion_desconocida() {
        let resultado = Config::from_args(args(&["--turbo"]));
        assert_eq!(resultado.unwrap_err(), "Opción desconocida: --turbo");
    }

    #[test]
    fn test_opcion_sin_valor() {
        let resultado = Config::from_args(args(&["--input"]));
        assert_eq!(resultado.unwrap_err(), "--input requiere un valor");
    }
}
