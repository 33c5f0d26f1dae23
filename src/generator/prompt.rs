//! Prompt Builder Module
//!
//! Renders a validated generation request into the natural-language query
//! sent to the completion endpoint. Pure and deterministic: the same request
//! always produces a byte-identical prompt, and every field value appears
//! verbatim in the output. Empty fields interpolate as empty strings; field
//! presence is the caller's concern.

use crate::models::GenerateRequest;

/// System instruction accompanying every generation request.
///
/// Names the three section markers the response parser recognizes.
pub const SYSTEM_INSTRUCTION: &str = "You are a website generator. Generate HTML, CSS, and \
    JavaScript code based on the following requirements. Separate your response into sections \
    marked with ##HTML##, ##CSS##, and ##JAVASCRIPT##.";

// == Build Prompt ==
/// Renders the user prompt for a generation request.
pub fn build_prompt(request: &GenerateRequest) -> String {
    format!(
        "Create a {} website with the following specifications:\n\
         - Business Name: {}\n\
         - Description: {}\n\
         - Pages ({}): {}\n\
         - Features: {}\n\
         - Color Scheme: {}\n\
         - Font Style: {}\n\
         - Layout: {}\n\
         \n\
         Include:\n\
         1. Responsive design\n\
         2. Modern UI/UX principles\n\
         3. SEO-friendly structure\n\
         \n\
         Return the complete HTML, CSS, and JavaScript in sections marked with ##HTML##, \
         ##CSS##, and ##JAVASCRIPT##.",
        request.website_type,
        request.business_name,
        request.business_description,
        request.page_count,
        request.pages.join(", "),
        request.features.join(", "),
        request.color_scheme,
        request.font_style,
        request.layout_preference,
    )
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> GenerateRequest {
        GenerateRequest {
            website_type: "portfolio".to_string(),
            page_count: 3,
            pages: vec!["Home".to_string(), "About".to_string(), "Contact".to_string()],
            business_name: "Acme Studio".to_string(),
            business_description: "A small design studio".to_string(),
            features: vec!["newsletter".to_string(), "booking".to_string()],
            color_scheme: "dark blue".to_string(),
            font_style: "serif".to_string(),
            layout_preference: "single column".to_string(),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = sample_request();
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_prompt_contains_every_field_value() {
        let request = sample_request();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("portfolio"));
        assert!(prompt.contains("Acme Studio"));
        assert!(prompt.contains("A small design studio"));
        assert!(prompt.contains("3"));
        assert!(prompt.contains("Home, About, Contact"));
        assert!(prompt.contains("newsletter, booking"));
        assert!(prompt.contains("dark blue"));
        assert!(prompt.contains("serif"));
        assert!(prompt.contains("single column"));
    }

    #[test]
    fn test_prompt_names_all_three_markers() {
        let prompt = build_prompt(&sample_request());

        assert!(prompt.contains("##HTML##"));
        assert!(prompt.contains("##CSS##"));
        assert!(prompt.contains("##JAVASCRIPT##"));
        assert!(SYSTEM_INSTRUCTION.contains("##HTML##"));
    }

    #[test]
    fn test_empty_fields_are_permitted() {
        let request = GenerateRequest {
            website_type: String::new(),
            page_count: 0,
            pages: vec![],
            business_name: String::new(),
            business_description: String::new(),
            features: vec![],
            color_scheme: String::new(),
            font_style: String::new(),
            layout_preference: String::new(),
        };

        // Degenerate request still renders; validation is not this module's job
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Create a  website"));
    }
}
