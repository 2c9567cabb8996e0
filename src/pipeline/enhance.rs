//! Prompt enhancement.
//!
//! Augments the user's description with style, color-scheme, complexity,
//! and industry hints. Each hint is appended only when its option is
//! non-empty, in the fixed order style -> color scheme -> complexity ->
//! industry. The ordering affects what the provider receives and is part
//! of the contract.

use crate::config::GenerateConfig;

/// Optional hints attached to one generation batch.
#[derive(Debug, Clone, Default)]
pub struct CustomizationOptions {
    pub style: String,
    pub color_scheme: String,
    pub complexity: String,
    pub industry: String,
}

impl CustomizationOptions {
    /// Config defaults overlaid with CLI values (CLI wins when set).
    pub fn from_config(config: &GenerateConfig) -> Self {
        Self {
            style: config.style.clone(),
            color_scheme: config.color_scheme.clone(),
            complexity: config.complexity.clone(),
            industry: config.industry.clone(),
        }
    }
}

/// Build the enhanced prompt sent to every slot in the batch.
pub fn enhance(prompt: &str, options: &CustomizationOptions) -> String {
    let mut enhanced = format!("Design a logo: {}", prompt.trim());

    if !options.style.is_empty() {
        enhanced.push_str(&format!(". Style: {}", options.style));
    }
    if !options.color_scheme.is_empty() {
        enhanced.push_str(&format!(". Color scheme: {}", options.color_scheme));
    }
    if !options.complexity.is_empty() {
        enhanced.push_str(&format!(". Complexity: {}", options.complexity));
    }
    if !options.industry.is_empty() {
        enhanced.push_str(&format!(". Industry: {}", options.industry));
    }

    enhanced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hints_is_just_the_prompt() {
        let out = enhance("a fox curled around a moon", &CustomizationOptions::default());
        assert_eq!(out, "Design a logo: a fox curled around a moon");
    }

    #[test]
    fn test_empty_hints_are_omitted() {
        let options = CustomizationOptions {
            color_scheme: "warm earth tones".to_string(),
            ..Default::default()
        };
        let out = enhance("a fox", &options);
        assert!(out.contains("Color scheme: warm earth tones"));
        assert!(!out.contains("Style:"));
        assert!(!out.contains("Complexity:"));
        assert!(!out.contains("Industry:"));
    }

    #[test]
    fn test_hint_order_is_fixed() {
        let options = CustomizationOptions {
            style: "geometric".to_string(),
            color_scheme: "monochrome".to_string(),
            complexity: "simple".to_string(),
            industry: "coffee shop".to_string(),
        };
        let out = enhance("a fox", &options);
        let style = out.find("Style:").unwrap();
        let colors = out.find("Color scheme:").unwrap();
        let complexity = out.find("Complexity:").unwrap();
        let industry = out.find("Industry:").unwrap();
        assert!(style < colors);
        assert!(colors < complexity);
        assert!(complexity < industry);
    }

    #[test]
    fn test_prompt_is_trimmed() {
        let out = enhance("  a fox  ", &CustomizationOptions::default());
        assert_eq!(out, "Design a logo: a fox");
    }
}
