// Run configuration, read from a RON file. Every field has a default,
// so a config file only states what it changes:
//
//     (
//         ifs: ",",
//         ips: "=",
//         format: Dkvp,
//         chain: [Tac],
//     )

use ron::de::from_reader;
use serde::Deserialize;
use std::fs::File;

// The verbs a pipeline can chain.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum Verb {
    Cat,
    Tac,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum OutputFormat {
    Dkvp,
    Json,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    // Input field and pair separators.
    pub ifs: String,
    pub ips: String,
    // Output field and pair separators.
    pub ofs: String,
    pub ops: String,
    pub format: OutputFormat,
    pub chain: Vec<Verb>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            ifs: ",".to_string(),
            ips: "=".to_string(),
            ofs: ",".to_string(),
            ops: "=".to_string(),
            format: OutputFormat::Dkvp,
            chain: vec![Verb::Cat],
        }
    }
}

pub fn load(path: String) -> Result<Config, String> {
    let file = File::open(&path)
        .map_err(|e| format!("couldn't open {}: {}", &path, e))?;
    from_reader(file).map_err(|e| format!("couldn't parse {}: {}", &path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ron::de::from_str;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ifs, ",");
        assert_eq!(config.ips, "=");
        assert_eq!(config.format, OutputFormat::Dkvp);
        assert_eq!(config.chain, vec![Verb::Cat]);
    }

    #[test]
    fn test_parse_full() {
        let config: Config = from_str(
            r#"(
                ifs: ";",
                ips: ":",
                ofs: ",",
                ops: "=",
                format: Json,
                chain: [Tac, Cat],
            )"#,
        )
        .unwrap();
        assert_eq!(config.ifs, ";");
        assert_eq!(config.ips, ":");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.chain, vec![Verb::Tac, Verb::Cat]);
    }

    #[test]
    fn test_parse_partial_takes_defaults() {
        let config: Config = from_str("(chain: [Tac])").unwrap();
        assert_eq!(config.chain, vec![Verb::Tac]);
        assert_eq!(config.ifs, ",");
        assert_eq!(config.format, OutputFormat::Dkvp);
    }
}
