use crate::cli::errors::{CliError, CliResult};
use url::Url;

/// Validates URL format
pub fn validate_url(url: &str) -> CliResult<()> {
    if url.trim().is_empty() {
        return Err(CliError::validation("url", "URL cannot be empty"));
    }

    match Url::parse(url) {
        Ok(parsed_url) => {
            if parsed_url.scheme().is_empty() {
                return Err(CliError::validation(
                    "url",
                    "URL must have a scheme (http://, https://, etc.)",
                ));
            }
            Ok(())
        }
        Err(_) => Err(CliError::validation("url", "Invalid URL format")),
    }
}

/// Validates tag format
pub fn validate_tags(tags: &str) -> CliResult<()> {
    for tag in tags.split(',').map(str::trim) {
        if tag.starts_with('#') {
            return Err(CliError::validation(
                "tags",
                "Tags are stored without the leading '#'",
            ));
        }

        if tag.chars().count() > 50 {
            return Err(CliError::validation(
                "tags",
                "Individual tags cannot exceed 50 characters",
            ));
        }
    }

    Ok(())
}

/// Validates title
pub fn validate_title(title: &str) -> CliResult<()> {
    if title.trim().is_empty() {
        return Err(CliError::validation("title", "Title cannot be empty"));
    }
    if title.chars().count() > 500 {
        return Err(CliError::validation(
            "title",
            "Title cannot exceed 500 characters",
        ));
    }
    Ok(())
}

/// Validates description length
pub fn validate_description(description: &str) -> CliResult<()> {
    if description.chars().count() > 2000 {
        return Err(CliError::validation(
            "description",
            "Description cannot exceed 2000 characters",
        ));
    }
    Ok(())
}

/// Validates note content
pub fn validate_content(content: &str) -> CliResult<()> {
    if content.trim().is_empty() || content == "<p><br></p>" {
        return Err(CliError::validation(
            "content",
            "Note content cannot be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://react.dev/").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("react.dev").is_err());
    }

    #[test]
    fn test_validate_tags() {
        assert!(validate_tags("react, frontend docs").is_ok());
        assert!(validate_tags("machine learning, rust").is_ok());
        assert!(validate_tags("rust, #react").is_err());
        assert!(validate_tags("").is_ok());
        assert!(validate_tags("#react").is_err());
        assert!(validate_tags(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_title_and_content() {
        assert!(validate_title("   ").is_err());
        assert!(validate_title("Weekly Goals").is_ok());
        assert!(validate_content("<p><br></p>").is_err());
        assert!(validate_content("<p>hi</p>").is_ok());
    }
}
