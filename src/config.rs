use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::*;

#[derive(Serialize, Deserialize, Debug)]
pub struct RawConfig {
    #[serde(default)]
    pub mask_rules: Vec<toml::Table>
}

pub struct MaskConfig {
    pub mask_rules: Vec<Box<dyn MaskRule>>
}

fn from_toml<T>(name: &str, rule: toml::Table) -> Result<Box<dyn MaskRule>, ConfigError>
where
    T: for<'de> Deserialize<'de> + MaskRule + 'static,
{
    let cfg: T = rule.try_into().map_err(|source| ConfigError::InvalidRule {
        name: name.to_string(),
        source,
    })?;
    Ok(Box::new(cfg))
}

pub fn parse_config(data: &str) -> Result<MaskConfig, ConfigError> {
    let data: RawConfig = toml::from_str(data)?;

    let mut config = MaskConfig {
        mask_rules: vec![]
    };

    for (index, rule) in data.mask_rules.into_iter().enumerate() {
        let name = rule.get("name")
            .and_then(|v| v.as_str())
            .ok_or(ConfigError::MissingName { index })?
            .to_string();

        let mask_rule = match name.as_str() {
            "Saturated" =>  from_toml::<Saturated>(&name, rule)?,
            "Min" =>        from_toml::<Min>(&name, rule)?,
            "Dark" =>       from_toml::<Dark>(&name, rule)?,
            "Border" =>     from_toml::<Border>(&name, rule)?,
            _ => return Err(ConfigError::UnknownRule { name }),
        };

        config.mask_rules.push(mask_rule);
    }
    Ok(config)
}

pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<MaskConfig, ConfigError> {
    let path = config_path.as_ref();
    let data_string = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_data::Image;
    use crate::mask::Mask;

    const CONFIG: &str = r#"
        [[mask_rules]]
        name = "Saturated"
        threshold = 0.95

        [[mask_rules]]
        name = "Dark"
        threshold = 0.1

        [[mask_rules]]
        name = "Min"
        threshold = 0.01

        [[mask_rules]]
        name = "Border"
        width = 4
    "#;

    #[test]
    fn test_parse_config(){
        let config = parse_config(CONFIG).unwrap();
        let names: Vec<String> = config.mask_rules.iter().map(|r| r.get_name()).collect();

        assert_eq!(names, vec!["Saturated", "Dark", "Min", "Border"]);
    }

    #[test]
    fn test_empty_config(){
        let config = parse_config("").unwrap();

        assert!(config.mask_rules.is_empty());
    }

    #[test]
    fn test_unknown_rule(){
        let result = parse_config("[[mask_rules]]\nname = \"Blur\"\n");

        assert!(matches!(result, Err(ConfigError::UnknownRule { name }) if name == "Blur"));
    }

    #[test]
    fn test_missing_name(){
        let result = parse_config("[[mask_rules]]\nname = \"Dark\"\nthreshold = 0.1\n[[mask_rules]]\nwidth = 2\n");

        assert!(matches!(result, Err(ConfigError::MissingName { index: 1 })));
    }

    #[test]
    fn test_negative_border_width(){
        let config = parse_config("[[mask_rules]]\nname = \"Border\"\nwidth = -3\n").unwrap();
        let image = Image::filled([0.5, 0.5, 0.5], 4, 4);
        let mut mask = Mask::for_image(&image);

        config.mask_rules[0].apply(&image, &mut mask);

        assert_eq!(mask.excluded_count(), 0);
    }

    #[test]
    fn test_invalid_rule_settings(){
        let result = parse_config("[[mask_rules]]\nname = \"Saturated\"\nthreshold = \"high\"\n");

        assert!(matches!(result, Err(ConfigError::InvalidRule { name, .. }) if name == "Saturated"));
    }

    #[test]
    fn test_load_missing_file(){
        let result = load_config("does/not/exist/maskconfig.toml");

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
